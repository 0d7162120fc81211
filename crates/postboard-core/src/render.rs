#![forbid(unsafe_code)]

//! Post list renderer.
//!
//! [`render_posts`] is a full rebuild: the previous post views are dropped
//! and regenerated from the store, so every context menu starts closed.
//! No handlers are attached here; the board's dispatcher resolves clicks
//! against whatever views the last render produced.
//!
//! [`render_text`] prints a document for a terminal, wrapping post bodies to
//! a width measured in cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::document::{
    ACTIONS_LABEL, DELETE_LABEL, Document, EDIT_LABEL, PostView, SUBMIT_LABEL,
};
use crate::event::Field;
use crate::store::PostStore;

const EMPTY_LIST: &str = "(нет постов)";
const DISABLED_NOTE: &str = "(недоступно)";
const EDITING_NOTE: &str = "(редактируется)";
const BODY_INDENT: usize = 4;

/// Rebuild every post view from the store.
pub fn render_posts(store: &PostStore, document: &mut Document) {
    let _span = tracing::debug_span!("posts.render", posts = store.len()).entered();

    let views = store
        .iter()
        .enumerate()
        .map(|(position, post)| PostView {
            id: post.id(),
            position,
            created_at: post.created_at().to_string(),
            title: post.title().to_string(),
            body: post.body().to_string(),
            menu_open: false,
        })
        .collect();
    document.replace_posts(views);
}

/// Plain-text rendering of the whole document.
#[must_use]
pub fn render_text(document: &Document, width: u16) -> String {
    let width = usize::from(width).max(BODY_INDENT + 1);
    let mut out = Vec::new();

    out.push(field_line(document, Field::Title, "Заголовок"));
    out.push(field_line(document, Field::Body, "Текст"));
    if document.submit_enabled() {
        out.push(format!("[{SUBMIT_LABEL}]"));
    } else {
        out.push(format!("[{SUBMIT_LABEL}] {DISABLED_NOTE}"));
    }
    if let Some(message) = document.message() {
        out.push(format!("! {message}"));
    }
    out.push("─".repeat(width));

    if document.posts().is_empty() {
        out.push(EMPTY_LIST.to_string());
    }
    for view in document.posts() {
        render_view(&mut out, view, document.editing() == Some(view.id), width);
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn field_line(document: &Document, field: Field, label: &str) -> String {
    let marker = if document.focus() == Some(field) { '>' } else { ' ' };
    let value = document.field(field);
    if value.is_empty() {
        format!("{marker} {label}:")
    } else {
        format!("{marker} {label}: {value}")
    }
}

fn render_view(out: &mut Vec<String>, view: &PostView, editing: bool, width: usize) {
    let mut header = format!("#{}  {}  [{ACTIONS_LABEL}]", view.position, view.created_at);
    if editing {
        header.push(' ');
        header.push_str(EDITING_NOTE);
    }
    out.push(header);

    let indent = " ".repeat(BODY_INDENT);
    let inner = width - BODY_INDENT;
    for line in wrap(&view.title, inner) {
        out.push(format!("{indent}{line}"));
    }
    for line in wrap(&view.body, inner) {
        out.push(format!("{indent}{line}"));
    }
    if view.menu_open {
        out.push(format!("{indent}[{DELETE_LABEL}] [{EDIT_LABEL}]"));
    }
}

/// Word-wrap to `width` cells; words wider than a line are split between
/// graphemes.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut used = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let sep = usize::from(used > 0);
            if used + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                used += sep + word_width;
                continue;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            for grapheme in word.graphemes(true) {
                let grapheme_width = UnicodeWidthStr::width(grapheme);
                if used > 0 && used + grapheme_width > width {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push_str(grapheme);
                used += grapheme_width;
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

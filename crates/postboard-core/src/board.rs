#![forbid(unsafe_code)]

//! Mounted posts board.
//!
//! A [`Board`] owns the post store and the document it renders into. It is
//! built once by [`Board::mount`], which checks the host markup for every
//! required element, and torn down by dropping it.
//!
//! [`Board::dispatch`] is the only event entry point. It plays the part of
//! every listener the page needs: input validation on both fields, the
//! new-post control, per-post action and menu-item clicks, and the
//! outside-click handler that closes context menus. Rendering only rebuilds
//! views, so no handler state accumulates across renders.
//!
//! # Editing
//!
//! The edit menu item loads a post into the form and marks it as being
//! edited. The next successful submission replaces that post's title and
//! body in place, keeping its id, timestamp and position. Deleting the
//! marked post drops the mark, so a later submission appends instead.

use crate::config::BoardConfig;
use crate::document::{Document, Markup};
use crate::error::{BoardError, Result};
use crate::event::{ClickTarget, Field, UiEvent};
use crate::post::{Clock, Post, PostDraft, PostId, SystemClock, format_timestamp};
use crate::render::render_posts;
use crate::store::PostStore;
use crate::validator::{self, Verdict};

/// What a successful submission did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Created(PostId),
    Updated(PostId),
}

impl Submission {
    #[must_use]
    pub const fn id(self) -> PostId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

/// Why a click had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The new-post control is disabled by the validation gate.
    SubmitDisabled,
    /// A menu item was clicked while its menu was closed.
    MenuClosed(PostId),
    /// The target post is not part of the current render.
    UnknownPost(PostId),
}

/// Observable result of one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Validated(Verdict),
    Submitted(Submission),
    /// Submit passed the gate but a trimmed field was empty.
    Aborted,
    Deleted(PostId),
    EditStarted(PostId),
    MenuToggled { id: PostId, open: bool },
    Focused(Field),
    /// Outside click; carries the number of menus it closed.
    MenusClosed(usize),
    Ignored(IgnoreReason),
}

pub struct Board<C: Clock = SystemClock> {
    config: BoardConfig,
    store: PostStore,
    document: Document,
    clock: C,
}

impl Board {
    /// Mount a board over `markup` using the local wall clock.
    pub fn mount(markup: &Markup, config: BoardConfig) -> Result<Self> {
        Self::mount_with_clock(markup, config, SystemClock)
    }
}

impl<C: Clock> Board<C> {
    /// Mount a board with an explicit clock.
    ///
    /// Fails without rendering anything if the markup lacks a required
    /// element.
    pub fn mount_with_clock(markup: &Markup, config: BoardConfig, clock: C) -> Result<Self> {
        if let Some(role) = markup.first_missing() {
            tracing::error!(message = "board.mount_failed", %role);
            return Err(BoardError::MissingElement { role });
        }

        let mut board = Self {
            config,
            store: PostStore::new(),
            document: Document::new(),
            clock,
        };
        render_posts(&board.store, &mut board.document);
        tracing::debug!(
            message = "board.mounted",
            title_limit = config.title_limit,
            body_limit = config.body_limit
        );
        Ok(board)
    }

    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &PostStore {
        &self.store
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Post currently loaded into the form for editing.
    #[must_use]
    pub const fn editing(&self) -> Option<PostId> {
        self.document.editing()
    }

    /// Route one UI event.
    pub fn dispatch(&mut self, event: UiEvent) -> Outcome {
        match event {
            UiEvent::Input { field, value } => {
                self.document.set_field(field, value);
                Outcome::Validated(validator::apply(&mut self.document, &self.config))
            }
            UiEvent::Click(target) => self.click(target),
        }
    }

    fn click(&mut self, target: ClickTarget) -> Outcome {
        let outcome = match target {
            // The actions control toggles its own menu and nothing else.
            ClickTarget::Actions(id) => return self.toggle_menu(id),
            ClickTarget::NewPost => self.click_new_post(),
            ClickTarget::Delete(id) => match self.require_open_menu(id) {
                Err(reason) => Outcome::Ignored(reason),
                Ok(()) => match self.delete(id) {
                    Some(_) => Outcome::Deleted(id),
                    None => Outcome::Ignored(IgnoreReason::UnknownPost(id)),
                },
            },
            ClickTarget::Edit(id) => match self.require_open_menu(id) {
                Err(reason) => Outcome::Ignored(reason),
                Ok(()) if self.edit(id) => Outcome::EditStarted(id),
                Ok(()) => Outcome::Ignored(IgnoreReason::UnknownPost(id)),
            },
            ClickTarget::Input(field) => {
                self.document.set_focus(field);
                Outcome::Focused(field)
            }
            ClickTarget::Outside => Outcome::MenusClosed(0),
        };

        let closed = self.close_menus_except(target.menu_owner());
        match outcome {
            Outcome::MenusClosed(_) => Outcome::MenusClosed(closed),
            other => other,
        }
    }

    fn click_new_post(&mut self) -> Outcome {
        if !self.document.submit_enabled() {
            tracing::warn!(message = "form.submit_ignored", reason = "gate closed");
            return Outcome::Ignored(IgnoreReason::SubmitDisabled);
        }
        match self.submit() {
            Some(submission) => Outcome::Submitted(submission),
            None => Outcome::Aborted,
        }
    }

    fn require_open_menu(&self, id: PostId) -> std::result::Result<(), IgnoreReason> {
        match self.document.post(id) {
            None => Err(IgnoreReason::UnknownPost(id)),
            Some(view) if !view.menu_open => Err(IgnoreReason::MenuClosed(id)),
            Some(_) => Ok(()),
        }
    }

    /// Read the form and create or update a post.
    ///
    /// Returns `None` when a trimmed field is empty or over its limit; the
    /// store and form are left untouched in that case. On success the list
    /// is re-rendered, both fields are cleared, the title field is focused,
    /// the message is hidden and the gate closes again.
    pub fn submit(&mut self) -> Option<Submission> {
        let title = trim_field(self.document.title()).to_string();
        let body = trim_field(self.document.body()).to_string();
        if title.is_empty() || body.is_empty() {
            tracing::debug!(message = "form.submit_aborted", reason = "empty");
            return None;
        }
        let verdict = validator::validate(&title, &body, &self.config);
        if !verdict.is_valid() {
            tracing::debug!(message = "form.submit_aborted", ?verdict);
            return None;
        }

        let editing = self
            .document
            .editing()
            .filter(|id| self.store.get_by_id(*id).is_some());
        let submission = match editing {
            Some(id) => {
                self.store.update(id, title, body);
                Submission::Updated(id)
            }
            None => {
                let created_at = format_timestamp(&self.clock.now());
                Submission::Created(self.store.append(PostDraft::new(title, body, created_at)))
            }
        };

        self.document.set_editing(None);
        render_posts(&self.store, &mut self.document);
        self.reset_form();
        tracing::info!(
            message = "form.submitted",
            ?submission,
            posts = self.store.len()
        );
        Some(submission)
    }

    /// Remove a post and re-render.
    pub fn delete(&mut self, id: PostId) -> Option<Post> {
        let position = self.store.position_of(id)?;
        self.delete_at(position)
    }

    /// Remove the post at a display position and re-render. Out-of-range
    /// positions change nothing.
    pub fn delete_at(&mut self, position: usize) -> Option<Post> {
        let removed = self.store.remove_at(position)?;
        if self.document.editing() == Some(removed.id()) {
            self.document.set_editing(None);
        }
        render_posts(&self.store, &mut self.document);
        tracing::info!(
            message = "post.deleted",
            id = %removed.id(),
            position,
            posts = self.store.len()
        );
        Some(removed)
    }

    /// Load a post into the form and mark it for editing.
    ///
    /// The gate is re-evaluated against the loaded values.
    pub fn edit(&mut self, id: PostId) -> bool {
        let Some(post) = self.store.get_by_id(id) else {
            return false;
        };
        let (title, body) = (post.title().to_string(), post.body().to_string());
        self.document.set_title(title);
        self.document.set_body(body);
        self.document.set_editing(Some(id));
        self.document.set_focus(Field::Title);
        validator::apply(&mut self.document, &self.config);
        tracing::info!(message = "post.edit_started", %id);
        true
    }

    /// Drop the editing mark and clear the form. Returns `false` if nothing
    /// was being edited.
    pub fn cancel_edit(&mut self) -> bool {
        let Some(id) = self.document.editing() else {
            return false;
        };
        self.document.set_editing(None);
        self.reset_form();
        tracing::info!(message = "post.edit_cancelled", %id);
        true
    }

    /// Flip the context menu of one post.
    pub fn toggle_menu(&mut self, id: PostId) -> Outcome {
        match self.document.post_mut(id) {
            Some(view) => {
                view.menu_open = !view.menu_open;
                Outcome::MenuToggled {
                    id,
                    open: view.menu_open,
                }
            }
            None => Outcome::Ignored(IgnoreReason::UnknownPost(id)),
        }
    }

    /// Close every open menu except the one owned by `keep`.
    pub fn close_menus_except(&mut self, keep: Option<PostId>) -> usize {
        let mut closed = 0;
        for view in self.document.posts_mut() {
            if view.menu_open && Some(view.id) != keep {
                view.menu_open = false;
                closed += 1;
            }
        }
        closed
    }

    fn reset_form(&mut self) {
        self.document.clear_inputs();
        self.document.set_focus(Field::Title);
        self.document.hide_message();
        self.document.set_submit_enabled(false);
    }
}

/// Trim whitespace and byte-order marks from both ends of a field value.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

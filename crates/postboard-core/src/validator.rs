#![forbid(unsafe_code)]

//! Validation gate for the new-post form.
//!
//! Runs on every input event against the raw field values and drives two
//! observable effects: the enabled state of the new-post control and the
//! inline validation message.
//!
//! Check order is fixed: emptiness of either field first, then the title
//! limit, then the body limit. The first failing check wins.

use serde::Serialize;

use crate::config::BoardConfig;
use crate::document::Document;

pub const EMPTY_MESSAGE: &str = "Заголовок и текст не могут быть пустыми";

/// Result of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Title or body has length zero.
    Empty,
    TitleTooLong { limit: usize },
    BodyTooLong { limit: usize },
    Valid,
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Message shown for this verdict, `None` when the message is hidden.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            Self::Empty => Some(EMPTY_MESSAGE.to_string()),
            Self::TitleTooLong { limit } => Some(format!(
                "Длина заголовка не должна превышать {limit} символов"
            )),
            Self::BodyTooLong { limit } => Some(format!(
                "Длина текста не должна превышать {limit} символов"
            )),
            Self::Valid => None,
        }
    }
}

/// Field length in characters.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[must_use]
pub fn validate(title: &str, body: &str, config: &BoardConfig) -> Verdict {
    let title_len = char_len(title);
    let body_len = char_len(body);

    if title_len == 0 || body_len == 0 {
        return Verdict::Empty;
    }
    if title_len > config.title_limit {
        return Verdict::TitleTooLong {
            limit: config.title_limit,
        };
    }
    if body_len > config.body_limit {
        return Verdict::BodyTooLong {
            limit: config.body_limit,
        };
    }
    Verdict::Valid
}

/// Validate the document's current field values and apply the verdict to
/// its message and submission gate.
pub fn apply(document: &mut Document, config: &BoardConfig) -> Verdict {
    let verdict = validate(document.title(), document.body(), config);
    match verdict.message() {
        Some(message) => {
            document.show_message(message);
            document.set_submit_enabled(false);
        }
        None => {
            document.hide_message();
            document.set_submit_enabled(true);
        }
    }
    tracing::trace!(message = "validator.apply", ?verdict);
    verdict
}

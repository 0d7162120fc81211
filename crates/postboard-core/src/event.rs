#![forbid(unsafe_code)]

//! UI events a host feeds into [`Board::dispatch`](crate::Board::dispatch).

use serde::{Deserialize, Serialize};

use crate::post::PostId;

/// One of the two form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Body,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NewPost,
    /// The `...` control of a post.
    Actions(PostId),
    /// "Delete" item inside a post's context menu.
    Delete(PostId),
    /// "Edit" item inside a post's context menu.
    Edit(PostId),
    Input(Field),
    /// Anything not covered above.
    Outside,
}

impl ClickTarget {
    /// Post whose context menu contains this target, if any.
    #[must_use]
    pub const fn menu_owner(self) -> Option<PostId> {
        match self {
            Self::Delete(id) | Self::Edit(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A field's value changed to `value`.
    Input { field: Field, value: String },
    Click(ClickTarget),
}

impl UiEvent {
    #[must_use]
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn click(target: ClickTarget) -> Self {
        Self::Click(target)
    }
}

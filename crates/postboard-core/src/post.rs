#![forbid(unsafe_code)]

//! Post records, their identifiers, and the creation timestamp format.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Stable identifier for a post.
///
/// Allocated by the store on append and never reused, so it stays valid
/// across deletions that shift display positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(u64);

impl PostId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}", self.0)
    }
}

/// A post that has passed the form controller but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub created_at: String,
    pub title: String,
    pub body: String,
}

impl PostDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            created_at: created_at.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    created_at: String,
    title: String,
    body: String,
}

impl Post {
    pub(crate) fn from_draft(id: PostId, draft: PostDraft) -> Self {
        Self {
            id,
            created_at: draft.created_at,
            title: draft.title,
            body: draft.body,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn replace_text(&mut self, title: String, body: String) {
        self.title = title;
        self.body = body;
    }
}

/// Format a timestamp as `H:MM D.MM.YYYY`.
///
/// Hours and day are unpadded; minutes and month are zero-padded to two
/// digits.
#[must_use]
pub fn format_timestamp<T: Datelike + Timelike>(at: &T) -> String {
    format!(
        "{}:{:02} {}.{:02}.{}",
        at.hour(),
        at.minute(),
        at.day(),
        at.month(),
        at.year()
    )
}

/// Source of wall-clock time for new posts.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    #[must_use]
    pub const fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

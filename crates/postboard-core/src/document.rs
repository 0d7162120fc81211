#![forbid(unsafe_code)]

//! Headless UI surface.
//!
//! [`Markup`] describes which elements a host page provides before mount.
//! [`Document`] is the live surface a mounted board owns: form fields, the
//! submission gate, the validation message and the transient post views
//! the renderer rebuilds on every pass.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::Field;
use crate::post::PostId;

pub const ACTIONS_LABEL: &str = "...";
pub const DELETE_LABEL: &str = "Удалить";
pub const EDIT_LABEL: &str = "Редактировать";
pub const SUBMIT_LABEL: &str = "Опубликовать";

/// Element roles a host page must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    TitleInput,
    BodyInput,
    NewPostButton,
    PostsContainer,
    ValidationMessage,
}

impl Role {
    /// Every role, in the order mount checks them.
    pub const REQUIRED: [Self; 5] = [
        Self::TitleInput,
        Self::BodyInput,
        Self::NewPostButton,
        Self::PostsContainer,
        Self::ValidationMessage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleInput => "title input",
            Self::BodyInput => "body input",
            Self::NewPostButton => "new post button",
            Self::PostsContainer => "posts container",
            Self::ValidationMessage => "validation message",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of elements a host page offers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup {
    roles: BTreeSet<Role>,
}

impl Markup {
    /// A page with every required element.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            roles: Role::REQUIRED.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    #[must_use]
    pub fn without(mut self, role: Role) -> Self {
        self.roles.remove(&role);
        self
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// First required role the page lacks.
    #[must_use]
    pub fn first_missing(&self) -> Option<Role> {
        Role::REQUIRED
            .into_iter()
            .find(|role| !self.roles.contains(role))
    }

    /// Load a markup description: a JSON array of role names.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Self>(&content)?)
    }
}

/// Rendered form of one post. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: PostId,
    pub position: usize,
    pub created_at: String,
    pub title: String,
    pub body: String,
    pub menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    title: String,
    body: String,
    submit_enabled: bool,
    message: Option<String>,
    focus: Option<Field>,
    editing: Option<PostId>,
    posts: Vec<PostView>,
    generation: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Fresh surface: empty fields, closed gate, hidden message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            submit_enabled: false,
            message: None,
            focus: None,
            editing: None,
            posts: Vec::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.body = value.into();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Title => self.set_title(value),
            Field::Body => self.set_body(value),
        }
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    /// Visible validation message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn hide_message(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub const fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = Some(field);
    }

    /// Post currently loaded into the form for editing.
    #[must_use]
    pub const fn editing(&self) -> Option<PostId> {
        self.editing
    }

    pub fn set_editing(&mut self, editing: Option<PostId>) {
        self.editing = editing;
    }

    #[must_use]
    pub fn posts(&self) -> &[PostView] {
        &self.posts
    }

    /// View at a display position of the current render.
    #[must_use]
    pub fn post_at(&self, position: usize) -> Option<&PostView> {
        self.posts.get(position)
    }

    #[must_use]
    pub fn post(&self, id: PostId) -> Option<&PostView> {
        self.posts.iter().find(|view| view.id == id)
    }

    pub(crate) fn post_mut(&mut self, id: PostId) -> Option<&mut PostView> {
        self.posts.iter_mut().find(|view| view.id == id)
    }

    pub(crate) fn posts_mut(&mut self) -> std::slice::IterMut<'_, PostView> {
        self.posts.iter_mut()
    }

    /// Discard every post view and install a freshly built list.
    pub(crate) fn replace_posts(&mut self, posts: Vec<PostView>) {
        self.posts = posts;
        self.generation += 1;
    }

    /// Number of full renders applied to this document.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// JSON snapshot of the whole surface.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_markup_has_every_role() {
        let markup = Markup::standard();
        for role in Role::REQUIRED {
            assert!(markup.contains(role), "{role}");
        }
        assert_eq!(markup.first_missing(), None);
    }

    #[test]
    fn first_missing_follows_check_order() {
        let markup = Markup::standard()
            .without(Role::ValidationMessage)
            .without(Role::BodyInput);
        assert_eq!(markup.first_missing(), Some(Role::BodyInput));
        assert_eq!(Markup::empty().first_missing(), Some(Role::TitleInput));
    }

    #[test]
    fn markup_parses_role_names() {
        let markup: Markup =
            serde_json::from_str(r#"["title-input", "body-input", "new-post-button"]"#)
                .expect("markup json");
        assert_eq!(markup.first_missing(), Some(Role::PostsContainer));
    }

    #[test]
    fn markup_rejects_unknown_role() {
        let err = serde_json::from_str::<Markup>(r#"["sidebar"]"#);
        assert!(err.is_err());
    }

    #[test]
    fn fresh_document_is_gated() {
        let document = Document::new();
        assert!(!document.submit_enabled());
        assert_eq!(document.message(), None);
        assert!(document.posts().is_empty());
        assert_eq!(document.generation(), 0);
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut document = Document::new();
        document.set_field(Field::Title, "t");
        document.set_field(Field::Body, "b");
        assert_eq!(document.field(Field::Title), "t");
        assert_eq!(document.field(Field::Body), "b");
        document.clear_inputs();
        assert_eq!(document.title(), "");
        assert_eq!(document.body(), "");
    }

    #[test]
    fn snapshot_json_names_fields() {
        let mut document = Document::new();
        document.show_message("m");
        let json = document.to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["message"], "m");
        assert_eq!(value["submit_enabled"], false);
        assert!(value["posts"].as_array().is_some_and(Vec::is_empty));
    }
}

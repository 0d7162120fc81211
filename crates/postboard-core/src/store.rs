#![forbid(unsafe_code)]

//! Ordered in-memory post store.
//!
//! Insertion order is display order. Positions are zero-based and only
//! meaningful against the current contents; ids are stable.

use crate::post::{Post, PostDraft, PostId};

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl PostStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post at the end and return its id.
    pub fn append(&mut self, draft: PostDraft) -> PostId {
        self.next_id += 1;
        let id = PostId::new(self.next_id);
        self.posts.push(Post::from_draft(id, draft));
        tracing::debug!(message = "store.append", %id, len = self.posts.len());
        id
    }

    /// Remove the post at `position`. Out-of-range positions leave the
    /// store untouched and return `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<Post> {
        if position >= self.posts.len() {
            tracing::warn!(
                message = "store.remove_out_of_range",
                position,
                len = self.posts.len()
            );
            return None;
        }
        let removed = self.posts.remove(position);
        tracing::debug!(
            message = "store.remove",
            id = %removed.id(),
            position,
            len = self.posts.len()
        );
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Post> {
        self.posts.get(position)
    }

    #[must_use]
    pub fn get_by_id(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    #[must_use]
    pub fn position_of(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id() == id)
    }

    /// Replace title and body of an existing post, keeping its id,
    /// timestamp and position. Returns `false` if the id is unknown.
    pub fn update(&mut self, id: PostId, title: String, body: String) -> bool {
        match self.posts.iter_mut().find(|post| post.id() == id) {
            Some(post) => {
                post.replace_text(title, body);
                tracing::debug!(message = "store.update", %id);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostStore {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

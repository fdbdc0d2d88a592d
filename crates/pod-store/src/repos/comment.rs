//! Comment repository.

use std::collections::HashSet;

use chrono::Utc;

use pod_core::entities::Comment;
use pod_core::ids::{PREFIX_COMMENT, generate_unique_id};

use crate::ContentStore;
use crate::error::StoreError;
use crate::helpers::require_text;

/// Input for [`ContentStore::add_comment`].
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Not checked against existing episodes.
    pub episode_id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
}

impl ContentStore {
    /// Insert a comment with a fresh ID and `created_at = now`.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` if the body is blank.
    pub fn add_comment(&mut self, new: NewComment) -> Result<Comment, StoreError> {
        require_text("content", &new.content)?;

        let id = generate_unique_id(PREFIX_COMMENT, |id| self.comments.contains_key(id))?;
        let comment = Comment {
            id: id.clone(),
            episode_id: new.episode_id,
            user_id: new.user_id,
            username: new.username,
            content: new.content,
            created_at: Utc::now(),
        };

        tracing::debug!(comment_id = %id, episode_id = %comment.episode_id, "comment added");
        self.comments.insert(id, comment.clone());
        Ok(comment)
    }

    /// Replace the body of a comment. Nothing else changes.
    ///
    /// Returns `Ok(None)` if the ID is unknown.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` if `content` is blank.
    pub fn update_comment(
        &mut self,
        id: &str,
        content: impl Into<String>,
    ) -> Result<Option<Comment>, StoreError> {
        let content = content.into();
        require_text("content", &content)?;

        let Some(comment) = self.comments.get_mut(id) else {
            return Ok(None);
        };
        comment.content = content;
        tracing::debug!(comment_id = %id, "comment updated");
        Ok(Some(comment.clone()))
    }

    /// Remove a comment. Returns it if it existed.
    pub fn delete_comment(&mut self, id: &str) -> Option<Comment> {
        let removed = self.comments.shift_remove(id);
        if removed.is_some() {
            tracing::debug!(comment_id = %id, "comment deleted");
        }
        removed
    }

    /// Comments on `episode_id`, in insertion order.
    #[must_use]
    pub fn comments_by_episode(&self, episode_id: &str) -> Vec<&Comment> {
        self.comments
            .values()
            .filter(|c| c.episode_id == episode_id)
            .collect()
    }

    /// Drop every comment on any of `episode_ids`; returns the removed IDs in
    /// insertion order.
    pub(crate) fn remove_comments_for_episodes(&mut self, episode_ids: &[String]) -> Vec<String> {
        if episode_ids.is_empty() {
            return Vec::new();
        }
        let doomed: HashSet<&str> = episode_ids.iter().map(String::as_str).collect();
        let mut removed = Vec::new();
        self.comments.retain(|comment_id, comment| {
            if doomed.contains(comment.episode_id.as_str()) {
                removed.push(comment_id.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}

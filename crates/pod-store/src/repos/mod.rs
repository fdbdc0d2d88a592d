//! Repository modules implementing CRUD operations for all content entities.
//!
//! Each module adds methods to `ContentStore` via `impl ContentStore` blocks.

pub mod comment;
pub mod episode;
pub mod podcast;

/// IDs removed by a delete, including everything removed by cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub podcast_ids: Vec<String>,
    pub episode_ids: Vec<String>,
    pub comment_ids: Vec<String>,
}

impl CascadeReport {
    /// Nothing matched; the delete was a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.podcast_ids.is_empty() && self.episode_ids.is_empty() && self.comment_ids.is_empty()
    }
}

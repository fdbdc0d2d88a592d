//! # pod-store
//!
//! In-memory content store for podhub: podcasts, their episodes, and the
//! comments on those episodes.
//!
//! Collections are insertion-ordered maps keyed by ID. All mutation goes
//! through the repository methods in [`repos`]; derived read models (search,
//! top-N, totals, creator stats) live in [`views`] as pure functions over a
//! store snapshot.

pub mod error;
mod helpers;
pub mod repos;
pub mod seed;
pub mod updates;
pub mod views;

#[cfg(test)]
mod test_support;

use indexmap::IndexMap;
use pod_core::entities::{Comment, Episode, Podcast};

pub use error::StoreError;
pub use repos::CascadeReport;
pub use repos::comment::NewComment;
pub use repos::episode::NewEpisode;
pub use repos::podcast::NewPodcast;

/// Process-wide content state. One instance per running app, owned by the
/// caller and passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    podcasts: IndexMap<String, Podcast>,
    episodes: IndexMap<String, Episode>,
    comments: IndexMap<String, Comment>,
}

impl ContentStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo podcasts, episodes and comment.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        for podcast in seed::demo_podcasts() {
            store.podcasts.insert(podcast.id.clone(), podcast);
        }
        for episode in seed::demo_episodes() {
            store.episodes.insert(episode.id.clone(), episode);
        }
        for comment in seed::demo_comments() {
            store.comments.insert(comment.id.clone(), comment);
        }
        tracing::debug!(
            podcasts = store.podcasts.len(),
            episodes = store.episodes.len(),
            comments = store.comments.len(),
            "seeded demo content"
        );
        store
    }

    #[must_use]
    pub fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.get(id)
    }

    #[must_use]
    pub fn episode(&self, id: &str) -> Option<&Episode> {
        self.episodes.get(id)
    }

    #[must_use]
    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.get(id)
    }

    /// All podcasts in insertion order.
    pub fn podcasts(&self) -> impl ExactSizeIterator<Item = &Podcast> {
        self.podcasts.values()
    }

    /// All episodes in insertion order.
    pub fn episodes(&self) -> impl ExactSizeIterator<Item = &Episode> {
        self.episodes.values()
    }

    /// All comments in insertion order.
    pub fn comments(&self) -> impl ExactSizeIterator<Item = &Comment> {
        self.comments.values()
    }
}

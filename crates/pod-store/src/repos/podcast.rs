//! Podcast repository: CRUD + owner lookup + cascade delete.

use chrono::Utc;

use pod_core::entities::Podcast;
use pod_core::ids::{PREFIX_PODCAST, generate_unique_id};

use crate::ContentStore;
use crate::error::StoreError;
use crate::helpers::require_text;
use crate::repos::CascadeReport;
use crate::seed::DEFAULT_COVER_IMAGE;
use crate::updates::podcast::PodcastUpdate;

/// Input for [`ContentStore::add_podcast`]. ID and creation time are assigned
/// by the store.
#[derive(Debug, Clone, Default)]
pub struct NewPodcast {
    pub title: String,
    pub description: String,
    pub host: String,
    /// Blank falls back to a stock cover.
    pub cover_image: String,
    pub created_by: String,
}

impl ContentStore {
    /// Insert a podcast with a fresh ID and `created_at = now`.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` if the title or description is blank.
    pub fn add_podcast(&mut self, new: NewPodcast) -> Result<Podcast, StoreError> {
        require_text("title", &new.title)?;
        require_text("description", &new.description)?;

        let id = generate_unique_id(PREFIX_PODCAST, |id| self.podcasts.contains_key(id))?;
        let cover_image = if new.cover_image.trim().is_empty() {
            DEFAULT_COVER_IMAGE.to_string()
        } else {
            new.cover_image
        };
        let podcast = Podcast {
            id: id.clone(),
            title: new.title,
            description: new.description,
            host: new.host,
            cover_image,
            created_by: new.created_by,
            created_at: Utc::now(),
        };

        tracing::debug!(podcast_id = %id, owner = %podcast.created_by, "podcast added");
        self.podcasts.insert(id, podcast.clone());
        Ok(podcast)
    }

    /// Merge `update` into the podcast. `None` if the ID is unknown.
    pub fn update_podcast(&mut self, id: &str, update: PodcastUpdate) -> Option<Podcast> {
        let podcast = self.podcasts.get_mut(id)?;
        if update.is_empty() {
            return Some(podcast.clone());
        }
        update.apply(podcast);
        tracing::debug!(podcast_id = %id, "podcast updated");
        Some(podcast.clone())
    }

    /// Remove the podcast, all episodes pointing at it, and all comments on
    /// those episodes.
    ///
    /// Episodes are removed by `podcast_id` even when the podcast itself is
    /// already gone.
    pub fn delete_podcast(&mut self, id: &str) -> CascadeReport {
        let mut report = CascadeReport::default();
        if self.podcasts.shift_remove(id).is_some() {
            report.podcast_ids.push(id.to_string());
        }

        self.episodes.retain(|episode_id, episode| {
            if episode.podcast_id == id {
                report.episode_ids.push(episode_id.clone());
                false
            } else {
                true
            }
        });
        report.comment_ids = self.remove_comments_for_episodes(&report.episode_ids);

        tracing::debug!(
            podcast_id = %id,
            episodes = report.episode_ids.len(),
            comments = report.comment_ids.len(),
            "podcast deleted"
        );
        report
    }

    /// Podcasts created by `account_id`, in insertion order.
    #[must_use]
    pub fn podcasts_by_owner(&self, account_id: &str) -> Vec<&Podcast> {
        self.podcasts
            .values()
            .filter(|p| p.is_owned_by(account_id))
            .collect()
    }
}

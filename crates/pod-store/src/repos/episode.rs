//! Episode repository: CRUD + play counting + by-podcast lookup.

use chrono::NaiveDate;

use pod_core::entities::Episode;
use pod_core::ids::{PREFIX_EPISODE, generate_unique_id};

use crate::ContentStore;
use crate::error::StoreError;
use crate::helpers::require_text;
use crate::repos::CascadeReport;
use crate::updates::episode::EpisodeUpdate;

/// Input for [`ContentStore::add_episode`]. Play count always starts at 0.
#[derive(Debug, Clone)]
pub struct NewEpisode {
    /// Not checked against existing podcasts.
    pub podcast_id: String,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: u32,
    pub audio_url: String,
    /// Blank is stored as `None`.
    pub topic: Option<String>,
}

impl ContentStore {
    /// Insert an episode with a fresh ID and zero plays.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` if the title or audio URL is blank or the
    /// duration is zero.
    pub fn add_episode(&mut self, new: NewEpisode) -> Result<Episode, StoreError> {
        require_text("title", &new.title)?;
        require_text("audio_url", &new.audio_url)?;
        if new.duration == 0 {
            return Err(StoreError::Validation("duration is required".into()));
        }

        let id = generate_unique_id(PREFIX_EPISODE, |id| self.episodes.contains_key(id))?;
        let episode = Episode {
            id: id.clone(),
            podcast_id: new.podcast_id,
            title: new.title,
            description: new.description,
            release_date: new.release_date,
            duration: new.duration,
            audio_url: new.audio_url,
            play_count: 0,
            topic: new.topic.filter(|t| !t.trim().is_empty()),
        };

        tracing::debug!(
            episode_id = %id,
            podcast_id = %episode.podcast_id,
            known_podcast = self.podcasts.contains_key(&episode.podcast_id),
            "episode added"
        );
        self.episodes.insert(id, episode.clone());
        Ok(episode)
    }

    /// Merge `update` into the episode. `None` if the ID is unknown; an empty
    /// update returns the record untouched.
    pub fn update_episode(&mut self, id: &str, update: EpisodeUpdate) -> Option<Episode> {
        let episode = self.episodes.get_mut(id)?;
        if update.is_empty() {
            return Some(episode.clone());
        }
        update.apply(episode);
        tracing::debug!(episode_id = %id, "episode updated");
        Some(episode.clone())
    }

    /// Remove the episode and every comment on it.
    pub fn delete_episode(&mut self, id: &str) -> CascadeReport {
        let mut report = CascadeReport::default();
        if self.episodes.shift_remove(id).is_some() {
            report.episode_ids.push(id.to_string());
        }
        report.comment_ids = self.remove_comments_for_episodes(&[id.to_string()]);

        tracing::debug!(
            episode_id = %id,
            comments = report.comment_ids.len(),
            "episode deleted"
        );
        report
    }

    /// Add one play. Returns the new count, `None` if the ID is unknown.
    pub fn increment_play_count(&mut self, id: &str) -> Option<u64> {
        let episode = self.episodes.get_mut(id)?;
        episode.play_count = episode.play_count.saturating_add(1);
        tracing::debug!(episode_id = %id, play_count = episode.play_count, "play counted");
        Some(episode.play_count)
    }

    /// Episodes whose `podcast_id` matches, in insertion order.
    ///
    /// The result borrows the store; it is a snapshot, not a live view.
    #[must_use]
    pub fn episodes_by_podcast(&self, podcast_id: &str) -> Vec<&Episode> {
        self.episodes
            .values()
            .filter(|e| e.podcast_id == podcast_id)
            .collect()
    }
}

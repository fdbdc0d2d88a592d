//! Episode update builder.

use chrono::NaiveDate;
use serde::Serialize;

use pod_core::entities::Episode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// `Some(None)` clears the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Option<String>>,
    /// Explicit edit; the only way play count goes down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
}

impl EpisodeUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.release_date.is_none()
            && self.duration.is_none()
            && self.audio_url.is_none()
            && self.topic.is_none()
            && self.play_count.is_none()
    }

    pub(crate) fn apply(self, episode: &mut Episode) {
        if let Some(title) = self.title {
            episode.title = title;
        }
        if let Some(description) = self.description {
            episode.description = description;
        }
        if let Some(release_date) = self.release_date {
            episode.release_date = release_date;
        }
        if let Some(duration) = self.duration {
            episode.duration = duration;
        }
        if let Some(audio_url) = self.audio_url {
            episode.audio_url = audio_url;
        }
        if let Some(topic) = self.topic {
            episode.topic = topic;
        }
        if let Some(play_count) = self.play_count {
            episode.play_count = play_count;
        }
    }
}

#[derive(Debug, Default)]
pub struct EpisodeUpdateBuilder(EpisodeUpdate);

impl EpisodeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub fn release_date(mut self, val: NaiveDate) -> Self {
        self.0.release_date = Some(val);
        self
    }

    #[must_use]
    pub fn duration(mut self, val: u32) -> Self {
        self.0.duration = Some(val);
        self
    }

    #[must_use]
    pub fn audio_url(mut self, val: impl Into<String>) -> Self {
        self.0.audio_url = Some(val.into());
        self
    }

    #[must_use]
    pub fn topic(mut self, val: Option<String>) -> Self {
        self.0.topic = Some(val);
        self
    }

    #[must_use]
    pub fn play_count(mut self, val: u64) -> Self {
        self.0.play_count = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> EpisodeUpdate {
        self.0
    }
}

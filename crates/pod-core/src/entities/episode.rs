use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single episode of a podcast.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Episode {
    pub id: String,
    /// Parent podcast ID. Not checked against existing podcasts.
    pub podcast_id: String,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Length in minutes.
    pub duration: u32,
    pub audio_url: String,
    pub play_count: u64,
    pub topic: Option<String>,
}

impl Episode {
    /// Case-insensitive substring match on title and topic. `needle` must
    /// already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .topic
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(needle))
    }
}

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A show. Owned by the podcaster account that created it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub cover_image: String,
    /// Owning account ID.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Podcast {
    #[must_use]
    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.created_by == account_id
    }
}

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A listener comment on an episode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub episode_id: String,
    /// Author account ID.
    pub user_id: String,
    /// Author display name at the time of posting.
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    #[must_use]
    pub fn is_authored_by(&self, account_id: &str) -> bool {
        self.user_id == account_id
    }
}

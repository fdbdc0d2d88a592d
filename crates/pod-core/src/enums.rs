//! Account roles and episode sort orders.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// What an account is allowed to do.
///
/// Podcasters create and manage shows, listeners browse and comment, admins
/// see platform-wide analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Podcaster,
    Listener,
    Admin,
}

impl Role {
    /// Return the string representation used in the persisted session record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Podcaster => "podcaster",
            Self::Listener => "listener",
            Self::Admin => "admin",
        }
    }

    /// Whether accounts with this role may create podcasts.
    #[must_use]
    pub const fn can_create_podcasts(self) -> bool {
        matches!(self, Self::Podcaster)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "podcaster" => Ok(Self::Podcaster),
            "listener" => Ok(Self::Listener),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// EpisodeSort
// ---------------------------------------------------------------------------

/// Sort key for the episode browser.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeSort {
    /// Highest play count first.
    #[default]
    Popular,
    /// Most recent release date first.
    Latest,
}

impl EpisodeSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Latest => "latest",
        }
    }
}

impl fmt::Display for EpisodeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_top_episodes_limit() -> usize {
    5
}

const fn default_admin_top_episodes_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How many episodes the dashboard "top episodes" list shows.
    #[serde(default = "default_top_episodes_limit")]
    pub top_episodes_limit: usize,

    /// How many episodes the admin analytics list shows.
    #[serde(default = "default_admin_top_episodes_limit")]
    pub admin_top_episodes_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            top_episodes_limit: default_top_episodes_limit(),
            admin_top_episodes_limit: default_admin_top_episodes_limit(),
        }
    }
}

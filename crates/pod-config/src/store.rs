//! Content store configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Load the demo accounts, podcasts, episodes and comment at startup.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

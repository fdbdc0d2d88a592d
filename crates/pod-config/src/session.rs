//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the persisted session record. Empty means the
    /// platform data directory (`~/.local/share/podhub` on Linux).
    #[serde(default)]
    pub dir: String,

    /// Drop a restored session whose account is no longer in the registry.
    #[serde(default)]
    pub revalidate_on_restore: bool,
}

impl SessionConfig {
    /// Resolve the storage directory, falling back to the platform data dir.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_dir().map(|p| p.join("podhub"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

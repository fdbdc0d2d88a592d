//! # pod-config
//!
//! Layered configuration loading for podhub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PODHUB_*` prefix, `__` as separator)
//! 2. Project-level `.podhub/config.toml`
//! 3. User-level `~/.config/podhub/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `PODHUB_SESSION__DIR` -> `session.dir`,
//! `PODHUB_STORE__SEED_DEMO_DATA` -> `store.seed_demo_data`, etc.
//!
//! ```no_run
//! use pod_config::PodConfig;
//!
//! let config = PodConfig::load_with_dotenv().expect("config");
//! if config.store.seed_demo_data {
//!     println!("demo data enabled");
//! }
//! ```

mod error;
mod general;
mod session;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PodConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PodConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".podhub/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PODHUB_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("podhub").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.top_episodes_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.top_episodes_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.admin_top_episodes_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.admin_top_episodes_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

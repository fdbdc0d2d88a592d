//! Errors surfaced by [`crate::AppContext`] operations.

use thiserror::Error;

use pod_auth::AuthError;
use pod_config::ConfigError;
use pod_store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The operation needs a signed-in account.
    #[error("not signed in")]
    NotAuthenticated,

    /// The signed-in account may not do this.
    #[error("not allowed: {0}")]
    Forbidden(String),

    /// The target of an actor-checked operation does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

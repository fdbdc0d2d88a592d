use thiserror::Error;

use pod_core::errors::CoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("please fill in all fields: {0}")]
    Validation(String),

    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("session record could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

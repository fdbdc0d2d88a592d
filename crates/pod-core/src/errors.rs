//! Cross-cutting error types for podhub.
//!
//! Domain-specific errors (`AuthError`, `StoreError`) live in their own
//! crates. `AppError` in `pod-app` is where they converge.

use thiserror::Error;

/// Errors that can be raised by any podhub crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (missing required field, empty body).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A role string did not name one of the known roles.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The OS random source failed while generating an identifier.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

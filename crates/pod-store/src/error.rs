//! Content store error types.

use thiserror::Error;

use pod_core::errors::CoreError;

/// Errors from content store mutations.
///
/// Missing IDs on update/delete are not errors; those calls return `None`
/// or an empty report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was blank or out of range. Nothing was written.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// ID generation or another core failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

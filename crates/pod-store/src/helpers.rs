//! Shared validation helpers for repository methods.

use crate::error::StoreError;

/// Reject a blank (empty or whitespace-only) required field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

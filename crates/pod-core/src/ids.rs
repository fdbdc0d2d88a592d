//! ID prefixes and random identifier generation.
//!
//! IDs look like `pod-3fa94c0e`: a three-letter entity prefix, a dash, and
//! eight lowercase hex characters drawn from the OS random source.

use crate::errors::CoreError;

pub const PREFIX_ACCOUNT: &str = "acc";
pub const PREFIX_PODCAST: &str = "pod";
pub const PREFIX_EPISODE: &str = "epi";
pub const PREFIX_COMMENT: &str = "cmt";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_ACCOUNT,
    PREFIX_PODCAST,
    PREFIX_EPISODE,
    PREFIX_COMMENT,
];

/// Fixed IDs of the seeded demo accounts. Seeded podcasts and comments
/// reference these.
pub const DEMO_PODCASTER_ID: &str = "acc-00000001";
pub const DEMO_LISTENER_ID: &str = "acc-00000002";
pub const DEMO_ADMIN_ID: &str = "acc-00000003";

/// Give up after this many collisions in a row.
const MAX_ATTEMPTS: usize = 16;

/// Generate a random `{prefix}-{8 hex}` identifier.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Generate an identifier that `is_taken` reports as free.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the random source fails or every
/// attempt collides.
pub fn generate_unique_id(
    prefix: &str,
    is_taken: impl Fn(&str) -> bool,
) -> Result<String, CoreError> {
    for _ in 0..MAX_ATTEMPTS {
        let id = generate_id(prefix)?;
        if !is_taken(&id) {
            return Ok(id);
        }
    }
    Err(CoreError::IdGeneration(format!(
        "no free '{prefix}' id after {MAX_ATTEMPTS} attempts"
    )))
}

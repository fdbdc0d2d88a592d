//! Tracing subscriber setup for embedding applications.

/// Filter used when `PODHUB_LOG` is unset.
#[must_use]
pub const fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install a global fmt subscriber. `PODHUB_LOG` takes precedence over the
/// `quiet`/`verbose` flags.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PODHUB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

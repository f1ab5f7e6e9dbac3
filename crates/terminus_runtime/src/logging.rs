//! Logging setup for the CLI.
//!
//! Logs go to stderr so they never interleave with the game transcript on
//! stdout. `RUST_LOG` takes precedence over the configured filter.

use terminus_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
///
/// # Errors
///
/// Returns an error if `default_filter` is not a valid filter directive.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "invalid log filter '{default_filter}': {e}"
            )))
        })?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}

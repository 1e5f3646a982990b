//! Tracing initialization for relay binaries.

use pictor_error::ConfigError;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with env-filter support.
///
/// Honors `RUST_LOG` when set, falling back to the given default directive
/// (e.g. `"pictor=info"`). Fails if a global subscriber was already
/// installed.
pub fn init_tracing(default_directive: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    info!(default_directive, "Tracing initialized");
    Ok(())
}

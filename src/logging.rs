//! Logging subscriber initialisation.
//!
//! The library only emits `tracing` events; binaries decide where they go.

use tracing_subscriber::{EnvFilter, fmt, util::TryInitError, prelude::*};

fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(build_env_filter(default_level))
        .try_init()
}

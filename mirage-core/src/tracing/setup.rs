//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Mirage tracing/logging system.
///
/// Reads the `MIRAGE_LOG` environment variable for per-subsystem log levels.
/// Format: `MIRAGE_LOG=mirage_analysis=debug,mirage_core=warn`
///
/// Falls back to `mirage=info` if `MIRAGE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MIRAGE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("mirage=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

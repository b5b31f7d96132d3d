//! Tracing subscriber setup for the host shell.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the process-wide subscriber. Call once at startup; the
/// classifiers themselves never touch a global and log only through the
/// injected sink.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_line_number(true)
                .with_file(true),
        )
        .init();
}

//! Diagnostic logging
//!
//! Log lines go to stderr through `tracing`. Operator-facing status lines are
//! printed to stdout by the session and are not affected by the filter.

use std::env;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "WALLSHUFFLE_LOG";

/// Filter used when `WALLSHUFFLE_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "wallshuffle=debug"
    } else {
        "wallshuffle=info"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(console::colors_enabled_stderr()),
        )
        .with(filter)
        .try_init();
}

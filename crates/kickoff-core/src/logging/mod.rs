//! Structured logging setup.
//!
//! Logs are JSON lines on stderr so stdout stays clean for tables and
//! `--json` output. Quiet runs log nothing unless `RUST_LOG` says otherwise.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default filter directive for the given verbosity.
pub fn default_directive(quiet: bool) -> &'static str {
    if quiet { "off" } else { "info" }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Already-installed subscriber (tests, embedding) is not an error.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

//! CLI infrastructure for the search toolkit
//!
//! This module provides the command-line interface for solving positions and
//! cross-checking the two search engines.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` and the
/// default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second call (e.g. from tests) leaves the existing subscriber in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Installs the `tracing` subscriber used by the binaries.

use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The most detailed level that is written to the terminal.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Write log events to stderr in the pretty format.
///
/// Store writes are logged at the `debug` level and are only shown when `verbose` is set.
///
/// # Panics
/// Panics if a global subscriber has already been installed.
pub fn setup_logging(verbose: bool) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(log_level(verbose)))
        .init();
}

//! Tracing setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber. An invalid `filter` falls back to `info`.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already set (e.g. several tests in one process).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

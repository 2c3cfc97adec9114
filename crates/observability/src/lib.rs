//! Tracing/logging setup shared by the workspace.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing with the default `info` filter.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with an explicit fallback filter directive.
///
/// `RUST_LOG` still wins when set. Tests use this to get store-level `debug`
/// output without touching the environment.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // JSON logs, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}

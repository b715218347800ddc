//! Tracing setup shared by the binaries.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Nothing here is
//! part of the API's output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_filter` if unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=todolist=debug,todolist_server=debug cargo run -p todolist-server
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

//! Diagnostic logging setup.
//!
//! The per-request console trace goes to stdout with `println!`. Everything
//! emitted through `tracing` goes to stderr so the two never interleave on
//! the same stream.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` narrows or widens diagnostics; it has no effect on responses.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

//! Diagnostics via `tracing`.
//!
//! Configure with `RUST_LOG`:
//! - `RUST_LOG=debug` - every sniff decision per file
//! - `RUST_LOG=srcnorm::pipeline=debug` - pipeline only
//!
//! Logs go to stderr; stdout carries the per-file report.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Defaults to `warn` when `RUST_LOG` is unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init();
}

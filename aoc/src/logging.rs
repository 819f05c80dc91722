//! Diagnostic tracing for the toolkit.
//!
//! Tracing is for development diagnostics only, written to stderr. Puzzle
//! answers and self-test verdicts go to stdout and are unaffected by
//! `RUST_LOG`. Mapping, sample loading and [`Timer`](crate::timer::Timer)
//! events are emitted at `debug`; `--time` prints its elapsed line to stderr
//! directly and does not depend on the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=aoc=debug aoc stats input.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

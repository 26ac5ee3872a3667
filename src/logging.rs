//! Logging setup on top of `tracing` and `tracing-subscriber`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` selects the level (default: warn), e.g.
/// `RUST_LOG=blasting_engine=debug`. Events go to stderr so report output on
/// stdout stays parseable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose subscriber for tests; repeated calls are ignored.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}

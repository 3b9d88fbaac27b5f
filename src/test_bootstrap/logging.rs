//! Unit-test logging initialization.
//!
//! One guarded entry point so every test binary gets the same subscriber
//! regardless of which test runs first.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the shared test subscriber.
///
/// Idempotent and race-safe. The log level is taken from `TEST_LOG` first,
/// then `RUST_LOG`, then defaults to `warn` so test output stays quiet
/// unless asked otherwise.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer() // cargo/nextest output capture
            .without_time()
            .try_init()
            .ok();
    });
}

fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|key| std::env::var(key).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

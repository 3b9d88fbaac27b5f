//! Logging initialization for integration test binaries.
//!
//! Mirrors the crate's unit-test bootstrap, implemented here because
//! integration tests cannot see the crate's test-only modules. Level
//! precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
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

/// Runs once per integration test binary, before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    init();
}

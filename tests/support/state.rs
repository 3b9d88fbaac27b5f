use std::time::Duration;

use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

/// Fixed signing config used across the integration suites.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(
        "test_secret_key_for_testing_purposes_only".as_bytes(),
        Duration::from_secs(15 * 60),
    )
}

/// App state over a fresh, empty in-memory store.
pub fn test_state() -> AppState {
    AppState::in_memory(test_security())
}

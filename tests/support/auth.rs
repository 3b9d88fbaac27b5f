//! Token helpers for tests

use std::time::SystemTime;

use backend::issue_token;
use backend::state::security_config::SecurityConfig;

/// Mint a token for the given subject with the configured TTL.
pub fn mint_test_token(subject: &str, sec: &SecurityConfig) -> String {
    issue_token(subject, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(subject: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(subject, sec))
}

/// Mint a token whose expiry already lies in the past (issued two TTLs ago).
pub fn mint_expired_token(subject: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - sec.token_ttl * 2;
    issue_token(subject, issued, sec).expect("should mint expired token successfully")
}

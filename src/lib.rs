#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Flat re-exports of the types callers touch most
pub use auth::claims::Claims;
pub use auth::jwt::{extract_subject, is_expired, is_valid_for, issue_token};
pub use auth::password::{hash_password, verify_password};
pub use auth::AuthContext;
pub use error::AppError;
pub use extractors::current_user::CurrentUser;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::bearer_auth::BearerAuth;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use store::{MemoryUserStore, StoreError, UserStore};

// Glob imports for tests that touch many modules at once
pub mod prelude {
    pub use super::auth::jwt::*;
    pub use super::domain::user::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::*;
    pub use super::store::*;
}

// Unit-test binaries get logging before the first test runs
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

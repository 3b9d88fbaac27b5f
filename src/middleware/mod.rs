pub mod bearer_auth;
pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

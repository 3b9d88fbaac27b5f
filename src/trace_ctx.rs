//! Task-local trace id shared across a request's future.
//!
//! The `RequestTrace` middleware scopes every request future with a fresh
//! trace id; anything running inside that scope (handlers, extractors, the
//! error boundary) can read it back without threading it through arguments.
//! Core service code should not import this module.

use std::cell::RefCell;

use tokio::task_local;

/// Response header carrying the request's trace id.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace id for the current task.
/// Returns "unknown" outside of a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace scope carrying the given id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

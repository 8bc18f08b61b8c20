//! Task-local request id for the HTTP boundary.
//!
//! `TraceSpan` scopes each request future with its id so error responses can
//! echo it back. Websocket traffic does not run inside this scope; room flow
//! logs carry `conn_id` and `room_id` instead.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// The current request's id, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

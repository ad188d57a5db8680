//! Task-local trace id for HTTP requests.
//!
//! `RequestTrace` opens the scope; error rendering reads it back so problem
//! details and the `x-trace-id` header agree. Websocket actors run outside
//! any request task and always see [`UNKNOWN`].

use tokio::task_local;

pub const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if inside one.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Trace id of the current request, or [`UNKNOWN`].
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

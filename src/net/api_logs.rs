//! Activity log endpoints: entries and dashboard counters.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_logs_test.rs"]
mod api_logs_test;

#[cfg(feature = "csr")]
use super::api::Method;
#[cfg(any(test, feature = "csr"))]
use super::api;
use super::error::ApiError;
use super::types::{DashboardStats, LogEntry};

#[cfg(feature = "csr")]
const STATS_ENDPOINT: &str = "/api/logs/stats";

/// Optional filters for `GET /api/logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub agent_id: Option<String>,
    pub action: Option<String>,
    pub limit: Option<u32>,
}

#[cfg(any(test, feature = "csr"))]
fn logs_endpoint(query: &LogQuery) -> String {
    let qs = api::build_query(&[
        ("agent_id", query.agent_id.clone()),
        ("action", query.action.clone()),
        ("limit", query.limit.map(|limit| limit.to_string())),
    ]);
    format!("/api/logs{qs}")
}

/// List activity log entries, newest first.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_logs(query: &LogQuery) -> Result<Vec<LogEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, &logs_endpoint(query), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(ApiError::unavailable())
    }
}

/// Fetch the aggregate dashboard counters.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, STATS_ENDPOINT, None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

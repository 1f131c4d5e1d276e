//! Failure taxonomy for API calls.
//!
//! DESIGN
//! ======
//! Callers branch on the failure kind instead of string-matching a single
//! generic error: transport failures pass through untouched, non-2xx
//! responses carry the server's message, and malformed success bodies are
//! their own case. `Display` for `Http` is the bare message so forms can
//! render `{err}` inline as the server-provided text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-layer failure (connection refused, DNS, offline).
    #[error("{0}")]
    Network(String),
    /// Non-2xx response; `message` is the body's `detail` field when the
    /// body parses as JSON, otherwise the canonical status text.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx response whose body did not decode as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error returned by every endpoint on non-browser builds.
    pub(crate) fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }
}

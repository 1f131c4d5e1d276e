//! Core REST request path and auth endpoints.
//!
//! Browser builds (`csr`): real HTTP via `gloo-net`, with the bearer token
//! attached from the token store when present. Host builds: stubs that
//! fail with [`ApiError::unavailable`] so the rest of the crate compiles
//! and tests off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is fire-once: no retry, no timeout, no backoff. Non-2xx
//! responses normalize to `ApiError::Http` carrying the body's `detail`
//! message when one parses, else the status text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginResponse, SignupResponse, User};
#[cfg(feature = "csr")]
pub(crate) use gloo_net::http::Method;

#[cfg(any(test, feature = "csr"))]
const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[cfg(feature = "csr")]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(feature = "csr")]
const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
#[cfg(feature = "csr")]
const ME_ENDPOINT: &str = "/api/auth/me";

/// API base URL, fixed at compile time via `MESA_API_URL`.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn api_base() -> &'static str {
    option_env!("MESA_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// `Authorization` header value for a stored access token, or `None`
/// when no token is present (the header is then omitted entirely).
#[cfg(any(test, feature = "csr"))]
pub(crate) fn auth_header_value(token: Option<&str>) -> Option<String> {
    match token {
        Some(token) if !token.is_empty() => Some(format!("Bearer {token}")),
        _ => None,
    }
}

/// Best-effort human-readable message for a non-2xx response.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn http_error_message(status_text: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(detail) = value.get("detail").and_then(|detail| detail.as_str())
        && !detail.is_empty()
    {
        return detail.to_owned();
    }
    if status_text.is_empty() {
        "Request failed".to_owned()
    } else {
        status_text.to_owned()
    }
}

/// Joins present `key=value` filters into a query string, or returns an
/// empty string when every value is absent. Values are percent-encoded;
/// keys are trusted literals.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn build_query(pairs: &[(&str, Option<String>)]) -> String {
    let joined = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| format!("{key}={}", encode_component(value)))
        })
        .collect::<Vec<_>>()
        .join("&");
    if joined.is_empty() {
        String::new()
    } else {
        format!("?{joined}")
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set,
/// byte-wise over the UTF-8 form.
#[cfg(any(test, feature = "csr"))]
fn encode_component(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Issues a JSON request against the API and decodes the response body.
#[cfg(feature = "csr")]
pub(crate) async fn request_json<B, T>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = format!("{}{path}", api_base());
    let mut builder = gloo_net::http::RequestBuilder::new(&url)
        .method(method)
        .header("Content-Type", "application/json");
    if let Some(value) = auth_header_value(crate::util::token_store::access_token().as_deref()) {
        builder = builder.header("Authorization", &value);
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?,
        None => builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: http_error_message(&status_text, &body),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Exchange credentials for a bearer token pair via `POST /api/auth/login`.
///
/// # Errors
///
/// `ApiError::Http` with the server's message when credentials are
/// rejected; `ApiError::Network` on transport failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        request_json(Method::POST, LOGIN_ENDPOINT, Some(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Register a new account and organization via `POST /api/auth/signup`.
/// Signing up does not authenticate; the caller logs in separately once
/// the account is confirmed.
///
/// # Errors
///
/// `ApiError::Http` with the server's message on rejection.
pub async fn signup(
    email: &str,
    password: &str,
    organization_name: &str,
) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "organization_name": organization_name,
        });
        request_json(Method::POST, SIGNUP_ENDPOINT, Some(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password, organization_name);
        Err(ApiError::unavailable())
    }
}

/// Fetch the authenticated user's profile via `GET /api/auth/me`.
///
/// # Errors
///
/// `ApiError::Http` with status 401 when the stored token is missing,
/// expired, or revoked.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        request_json(Method::GET, ME_ENDPOINT, None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

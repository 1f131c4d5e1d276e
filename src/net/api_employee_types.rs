//! Employee-type catalog endpoint.

#![allow(clippy::unused_async)]

#[cfg(feature = "csr")]
use super::api::{self, Method};
use super::error::ApiError;
use super::types::EmployeeType;

#[cfg(feature = "csr")]
const EMPLOYEE_TYPES_ENDPOINT: &str = "/api/employee-types";

/// List the hireable employee types (used by the deploy dialog and the
/// pricing page).
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_employee_types() -> Result<Vec<EmployeeType>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(
            Method::GET,
            EMPLOYEE_TYPES_ENDPOINT,
            None::<&serde_json::Value>,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

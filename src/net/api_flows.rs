//! Conversation-flow endpoints: scripted flows per employee type.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_flows_test.rs"]
mod api_flows_test;

#[cfg(feature = "csr")]
use super::api::Method;
#[cfg(any(test, feature = "csr"))]
use super::api;
use super::error::ApiError;
use super::types::{ConversationFlow, DeleteResponse};

/// Body for `POST /api/flows`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewFlow {
    pub employee_type_id: String,
    pub flow_name: String,
    pub flow_definition: serde_json::Value,
}

/// Partial update body for `PUT /api/flows/:id`.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct FlowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_definition: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(any(test, feature = "csr"))]
fn flows_endpoint(employee_type_id: Option<&str>) -> String {
    let qs = api::build_query(&[("employee_type_id", employee_type_id.map(str::to_owned))]);
    format!("/api/flows{qs}")
}

#[cfg(any(test, feature = "csr"))]
fn flow_endpoint(id: &str) -> String {
    format!("/api/flows/{id}")
}

/// List flows, optionally scoped to one employee type.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_flows(employee_type_id: Option<&str>) -> Result<Vec<ConversationFlow>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(
            Method::GET,
            &flows_endpoint(employee_type_id),
            None::<&serde_json::Value>,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = employee_type_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single flow by id.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_flow(id: &str) -> Result<ConversationFlow, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, &flow_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Create a flow.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn create_flow(new_flow: &NewFlow) -> Result<ConversationFlow, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::POST, "/api/flows", Some(new_flow)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = new_flow;
        Err(ApiError::unavailable())
    }
}

/// Apply a partial update to a flow.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn update_flow(id: &str, update: &FlowUpdate) -> Result<ConversationFlow, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::PUT, &flow_endpoint(id), Some(update)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, update);
        Err(ApiError::unavailable())
    }
}

/// Delete a flow.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn delete_flow(id: &str) -> Result<DeleteResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::DELETE, &flow_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

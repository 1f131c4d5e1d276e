//! Agent endpoints: CRUD plus per-channel toggles.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_agents_test.rs"]
mod api_agents_test;

#[cfg(feature = "csr")]
use super::api::{self, Method};
use super::error::ApiError;
use super::types::{Agent, AgentChannel, DeleteResponse};

#[cfg(any(test, feature = "csr"))]
const AGENTS_ENDPOINT: &str = "/api/agents";

#[cfg(any(test, feature = "csr"))]
fn agent_endpoint(id: &str) -> String {
    format!("/api/agents/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn agent_channels_endpoint(id: &str) -> String {
    format!("/api/agents/{id}/channels")
}

/// Partial update body for `PUT /api/agents/:id`; absent fields are left
/// untouched server-side.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// List the organization's agents.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_agents() -> Result<Vec<Agent>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, AGENTS_ENDPOINT, None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch a single agent by id.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_agent(id: &str) -> Result<Agent, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, &agent_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Deploy a new agent of the given employee type.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn create_agent(
    employee_type_id: &str,
    name: &str,
    custom_system_prompt: Option<&str>,
) -> Result<Agent, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut payload = serde_json::json!({
            "employee_type_id": employee_type_id,
            "name": name,
        });
        if let Some(prompt) = custom_system_prompt {
            payload["custom_system_prompt"] = serde_json::Value::String(prompt.to_owned());
        }
        api::request_json(Method::POST, AGENTS_ENDPOINT, Some(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (employee_type_id, name, custom_system_prompt);
        Err(ApiError::unavailable())
    }
}

/// Apply a partial update to an agent (rename, prompt, status).
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn update_agent(id: &str, update: &AgentUpdate) -> Result<Agent, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::PUT, &agent_endpoint(id), Some(update)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, update);
        Err(ApiError::unavailable())
    }
}

/// Delete an agent.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn delete_agent(id: &str) -> Result<DeleteResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::DELETE, &agent_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Enable or disable one of the agent's channels.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn update_agent_channel(
    id: &str,
    channel: &str,
    is_enabled: bool,
) -> Result<AgentChannel, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "channel": channel, "is_enabled": is_enabled });
        api::request_json(Method::PUT, &agent_channels_endpoint(id), Some(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, channel, is_enabled);
        Err(ApiError::unavailable())
    }
}

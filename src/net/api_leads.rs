//! Lead endpoints: CRUD over captured leads.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_leads_test.rs"]
mod api_leads_test;

#[cfg(feature = "csr")]
use super::api::Method;
#[cfg(any(test, feature = "csr"))]
use super::api;
use super::error::ApiError;
use super::types::{DeleteResponse, Lead};

/// Optional filters for `GET /api/leads`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadQuery {
    pub status: Option<String>,
    pub agent_id: Option<String>,
    pub is_hot: Option<bool>,
    pub service_type: Option<String>,
    pub limit: Option<u32>,
}

/// Body for `POST /api/leads`; every field is optional, the backend
/// fills defaults (status `new`, score 0).
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct NewLead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update body for `PUT /api/leads/:id`.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(any(test, feature = "csr"))]
fn leads_endpoint(query: &LeadQuery) -> String {
    let qs = api::build_query(&[
        ("status", query.status.clone()),
        ("agent_id", query.agent_id.clone()),
        ("is_hot", query.is_hot.map(|hot| hot.to_string())),
        ("service_type", query.service_type.clone()),
        ("limit", query.limit.map(|limit| limit.to_string())),
    ]);
    format!("/api/leads{qs}")
}

#[cfg(any(test, feature = "csr"))]
fn lead_endpoint(id: &str) -> String {
    format!("/api/leads/{id}")
}

/// List leads, optionally filtered.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_leads(query: &LeadQuery) -> Result<Vec<Lead>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, &leads_endpoint(query), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single lead by id.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_lead(id: &str) -> Result<Lead, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::GET, &lead_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Capture a lead manually.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn create_lead(new_lead: &NewLead) -> Result<Lead, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::POST, "/api/leads", Some(new_lead)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = new_lead;
        Err(ApiError::unavailable())
    }
}

/// Apply a partial update to a lead (contact details, status).
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn update_lead(id: &str, update: &LeadUpdate) -> Result<Lead, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::PUT, &lead_endpoint(id), Some(update)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, update);
        Err(ApiError::unavailable())
    }
}

/// Delete a lead.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn delete_lead(id: &str) -> Result<DeleteResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::DELETE, &lead_endpoint(id), None::<&serde_json::Value>).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

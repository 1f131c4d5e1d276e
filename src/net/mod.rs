//! REST client for the Mesa API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the core request path (base URL, headers, error
//! normalization) plus the auth endpoints; the `api_*` modules are thin
//! argument-to-URL/body mappings over it, one per backend router. `types`
//! defines the response DTOs and `error` the failure taxonomy.

pub mod api;
pub mod api_agents;
pub mod api_chat;
pub mod api_employee_types;
pub mod api_flows;
pub mod api_leads;
pub mod api_logs;
pub mod error;
pub mod types;

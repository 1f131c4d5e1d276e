//! Response DTOs for the Mesa API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response shapes field-for-field so
//! serde stays schema-driven. Nothing here is validated client-side beyond
//! optional/required typing; records are replaced wholesale on each fetch,
//! never patched in place. Nested `agents(name)`-style joins from the
//! backend surface as small `*Ref` structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Organization summary joined onto the `/api/auth/me` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: String,
    pub name: String,
}

/// The authenticated user as returned by `GET /api/auth/me`.
///
/// Immutable once fetched; a new probe replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub organization_id: String,
    pub role: String,
    #[serde(default)]
    pub organizations: Option<OrganizationRef>,
}

/// Minimal user echo inside the login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: String,
    pub email: String,
}

/// `POST /api/auth/login` response carrying the bearer token pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: LoginUser,
}

/// `POST /api/auth/signup` response; `message` is shown to the user
/// (e.g. "Account created. Check your email to confirm.").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user_id: String,
    pub organization_id: String,
    pub message: String,
}

/// Name-only join of a related record (`agents(name)` selects).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRef {
    pub name: String,
}

/// Name/description join of an agent's employee type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTypeRef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A channel binding on an agent (voice, whatsapp, email, chat).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentChannel {
    pub channel: String,
    pub is_enabled: bool,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// An AI agent. `status` is one of `active`, `paused`, `cancelled`,
/// `draft`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub custom_system_prompt: Option<String>,
    #[serde(default)]
    pub voice_config: Option<serde_json::Value>,
    #[serde(default)]
    pub employee_types: Option<EmployeeTypeRef>,
    #[serde(default)]
    pub agent_channels: Vec<AgentChannel>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate counters for the dashboard from `GET /api/logs/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub messages_total: i64,
    pub leads_total: i64,
    pub bookings_total: i64,
    pub agents_active: i64,
}

/// A captured lead with its score and routing metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub organization_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub service_data: serde_json::Value,
    #[serde(default)]
    pub lead_score: i64,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub source_channel: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub agents: Option<AgentRef>,
}

/// A conversation thread as listed by `GET /api/chat/conversations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    pub status: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub agents: Option<AgentRef>,
}

/// A single message in a conversation. `role` is `user` or `assistant`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /api/chat` response: the agent's reply plus the thread it
/// landed in (newly created when no `conversation_id` was sent).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub conversation_id: String,
}

/// A hireable employee type with monthly pricing in minor units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_monthly: i64,
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
    pub is_active: bool,
}

/// An activity log entry from `GET /api/logs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub agents: Option<AgentRef>,
}

/// A scripted conversation flow attached to an employee type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationFlow {
    pub id: String,
    pub employee_type_id: String,
    pub flow_name: String,
    pub flow_definition: serde_json::Value,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Acknowledgement body for DELETE endpoints. Agents and leads answer
/// with `message`, flows with `status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

//! Chat endpoints: outbound messages, conversation lists, threads.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_chat_test.rs"]
mod api_chat_test;

#[cfg(feature = "csr")]
use super::api::Method;
#[cfg(any(test, feature = "csr"))]
use super::api;
use super::error::ApiError;
use super::types::{ChatReply, Conversation, Message};

#[cfg(feature = "csr")]
const CHAT_ENDPOINT: &str = "/api/chat";

/// Optional filters for `GET /api/chat/conversations`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationQuery {
    pub agent_id: Option<String>,
    pub channel: Option<String>,
    pub status: Option<String>,
}

/// Body for `POST /api/chat`. Omitting `conversation_id` starts a new
/// thread; contact fields seed it.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct OutgoingMessage {
    pub agent_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

#[cfg(any(test, feature = "csr"))]
fn conversations_endpoint(query: &ConversationQuery) -> String {
    let qs = api::build_query(&[
        ("agent_id", query.agent_id.clone()),
        ("channel", query.channel.clone()),
        ("status", query.status.clone()),
    ]);
    format!("/api/chat/conversations{qs}")
}

#[cfg(any(test, feature = "csr"))]
fn messages_endpoint(conversation_id: &str) -> String {
    format!("/api/chat/conversations/{conversation_id}/messages")
}

/// Send a message to an agent and receive its reply.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn send_message(outgoing: &OutgoingMessage) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(Method::POST, CHAT_ENDPOINT, Some(outgoing)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = outgoing;
        Err(ApiError::unavailable())
    }
}

/// List conversations, optionally filtered by agent, channel, or status.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_conversations(query: &ConversationQuery) -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(
            Method::GET,
            &conversations_endpoint(query),
            None::<&serde_json::Value>,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(ApiError::unavailable())
    }
}

/// Fetch the full message history of a conversation.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn fetch_messages(conversation_id: &str) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::request_json(
            Method::GET,
            &messages_endpoint(conversation_id),
            None::<&serde_json::Value>,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = conversation_id;
        Err(ApiError::unavailable())
    }
}

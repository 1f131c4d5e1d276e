use super::*;

#[test]
fn conversations_endpoint_without_filters_has_no_query() {
    assert_eq!(
        conversations_endpoint(&ConversationQuery::default()),
        "/api/chat/conversations"
    );
}

#[test]
fn conversations_endpoint_joins_present_filters() {
    let query = ConversationQuery {
        agent_id: Some("ag1".to_owned()),
        channel: None,
        status: Some("active".to_owned()),
    };
    assert_eq!(
        conversations_endpoint(&query),
        "/api/chat/conversations?agent_id=ag1&status=active"
    );
}

#[test]
fn messages_endpoint_formats_expected_path() {
    assert_eq!(
        messages_endpoint("c42"),
        "/api/chat/conversations/c42/messages"
    );
}

#[test]
fn outgoing_message_omits_absent_fields() {
    let outgoing = OutgoingMessage {
        agent_id: "ag1".to_owned(),
        message: "hello".to_owned(),
        ..OutgoingMessage::default()
    };
    let body = serde_json::to_value(&outgoing).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"agent_id": "ag1", "message": "hello"})
    );
}

#[test]
fn outgoing_message_carries_thread_id_when_replying() {
    let outgoing = OutgoingMessage {
        agent_id: "ag1".to_owned(),
        message: "hello again".to_owned(),
        conversation_id: Some("c42".to_owned()),
        ..OutgoingMessage::default()
    };
    let body = serde_json::to_value(&outgoing).unwrap();
    assert_eq!(body["conversation_id"], "c42");
}

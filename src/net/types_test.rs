use super::*;

#[test]
fn me_response_parses_with_organization_join() {
    let raw = r#"{
        "id": "u1",
        "email": "a@b.com",
        "organization_id": "org1",
        "role": "owner",
        "organizations": {"id": "org1", "name": "Tech Corp Inc."}
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.organizations.unwrap().name, "Tech Corp Inc.");
}

#[test]
fn me_response_parses_without_organization_join() {
    let raw = r#"{"id": "u1", "email": "a@b.com", "organization_id": "org1", "role": "member"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(user.organizations.is_none());
}

#[test]
fn agent_parses_with_nulls_and_missing_channels() {
    let raw = r#"{
        "id": "ag1",
        "name": "Amara",
        "status": "active",
        "custom_system_prompt": null,
        "employee_types": {"name": "Receptionist", "description": null}
    }"#;
    let agent: Agent = serde_json::from_str(raw).unwrap();
    assert_eq!(agent.status, "active");
    assert!(agent.custom_system_prompt.is_none());
    assert!(agent.agent_channels.is_empty());
    assert_eq!(agent.employee_types.unwrap().name, "Receptionist");
}

#[test]
fn lead_defaults_apply_for_sparse_rows() {
    let raw = r#"{"id": "l1", "organization_id": "org1", "status": "new"}"#;
    let lead: Lead = serde_json::from_str(raw).unwrap();
    assert_eq!(lead.lead_score, 0);
    assert!(!lead.is_hot);
    assert!(lead.service_data.is_null());
    assert!(lead.agents.is_none());
}

#[test]
fn conversation_parses_without_agent_join() {
    let raw = r#"{"id": "c1", "status": "active", "channel": "whatsapp"}"#;
    let convo: Conversation = serde_json::from_str(raw).unwrap();
    assert_eq!(convo.channel.as_deref(), Some("whatsapp"));
    assert!(convo.agents.is_none());
}

#[test]
fn delete_response_accepts_both_ack_shapes() {
    let agents: DeleteResponse = serde_json::from_str(r#"{"message": "Agent deleted"}"#).unwrap();
    assert_eq!(agents.message.as_deref(), Some("Agent deleted"));

    let flows: DeleteResponse = serde_json::from_str(r#"{"status": "deleted"}"#).unwrap();
    assert_eq!(flows.status.as_deref(), Some("deleted"));
}

#[test]
fn login_response_round_trips() {
    let raw = r#"{
        "access_token": "at",
        "refresh_token": "rt",
        "user": {"id": "u1", "email": "a@b.com"}
    }"#;
    let login: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(login.access_token, "at");
    assert_eq!(login.user.email, "a@b.com");
}

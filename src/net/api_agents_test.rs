use super::*;

#[test]
fn collection_endpoint_is_stable() {
    assert_eq!(AGENTS_ENDPOINT, "/api/agents");
}

#[test]
fn agent_endpoint_formats_expected_path() {
    assert_eq!(agent_endpoint("ag1"), "/api/agents/ag1");
}

#[test]
fn agent_channels_endpoint_formats_expected_path() {
    assert_eq!(agent_channels_endpoint("ag1"), "/api/agents/ag1/channels");
}

#[test]
fn agent_update_serializes_only_present_fields() {
    let update = AgentUpdate {
        status: Some("paused".to_owned()),
        ..AgentUpdate::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body, serde_json::json!({"status": "paused"}));
}

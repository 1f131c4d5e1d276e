use super::*;

#[test]
fn flows_endpoint_with_and_without_scope() {
    assert_eq!(flows_endpoint(None), "/api/flows");
    assert_eq!(
        flows_endpoint(Some("et1")),
        "/api/flows?employee_type_id=et1"
    );
}

#[test]
fn flow_endpoint_formats_expected_path() {
    assert_eq!(flow_endpoint("f3"), "/api/flows/f3");
}

#[test]
fn flow_update_serializes_only_present_fields() {
    let update = FlowUpdate {
        is_active: Some(false),
        ..FlowUpdate::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body, serde_json::json!({"is_active": false}));
}

use super::*;

#[test]
fn leads_endpoint_without_filters_has_no_query() {
    assert_eq!(leads_endpoint(&LeadQuery::default()), "/api/leads");
}

#[test]
fn leads_endpoint_stringifies_bool_and_numeric_filters() {
    let query = LeadQuery {
        status: Some("new".to_owned()),
        is_hot: Some(true),
        limit: Some(50),
        ..LeadQuery::default()
    };
    assert_eq!(
        leads_endpoint(&query),
        "/api/leads?status=new&is_hot=true&limit=50"
    );
}

#[test]
fn lead_endpoint_formats_expected_path() {
    assert_eq!(lead_endpoint("l7"), "/api/leads/l7");
}

#[test]
fn new_lead_serializes_only_present_fields() {
    let new_lead = NewLead {
        name: Some("Sarah J.".to_owned()),
        email: Some("sarah@example.com".to_owned()),
        ..NewLead::default()
    };
    let body = serde_json::to_value(&new_lead).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"name": "Sarah J.", "email": "sarah@example.com"})
    );
}

#[test]
fn lead_update_serializes_only_present_fields() {
    let update = LeadUpdate {
        status: Some("contacted".to_owned()),
        ..LeadUpdate::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert_eq!(body, serde_json::json!({"status": "contacted"}));
}

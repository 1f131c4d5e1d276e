use super::*;

#[test]
fn logs_endpoint_without_filters_has_no_query() {
    assert_eq!(logs_endpoint(&LogQuery::default()), "/api/logs");
}

#[test]
fn logs_endpoint_stringifies_numeric_limit() {
    let query = LogQuery {
        limit: Some(8),
        ..LogQuery::default()
    };
    assert_eq!(logs_endpoint(&query), "/api/logs?limit=8");
}

#[test]
fn logs_endpoint_joins_all_filters() {
    let query = LogQuery {
        agent_id: Some("ag1".to_owned()),
        action: Some("lead_created".to_owned()),
        limit: Some(20),
    };
    assert_eq!(
        logs_endpoint(&query),
        "/api/logs?agent_id=ag1&action=lead_created&limit=20"
    );
}

use super::*;

#[test]
fn auth_header_formats_bearer_token() {
    assert_eq!(
        auth_header_value(Some("tok123")),
        Some("Bearer tok123".to_owned())
    );
}

#[test]
fn auth_header_omitted_without_token() {
    assert_eq!(auth_header_value(None), None);
    assert_eq!(auth_header_value(Some("")), None);
}

#[test]
fn error_message_prefers_json_detail_field() {
    assert_eq!(
        http_error_message("Unauthorized", r#"{"detail": "Invalid credentials"}"#),
        "Invalid credentials"
    );
}

#[test]
fn error_message_falls_back_to_status_text_for_non_json_body() {
    assert_eq!(
        http_error_message("Internal Server Error", "<html>boom</html>"),
        "Internal Server Error"
    );
}

#[test]
fn error_message_falls_back_when_detail_is_missing_or_empty() {
    assert_eq!(http_error_message("Bad Request", r#"{"other": 1}"#), "Bad Request");
    assert_eq!(http_error_message("Bad Request", r#"{"detail": ""}"#), "Bad Request");
}

#[test]
fn error_message_has_a_last_resort_default() {
    assert_eq!(http_error_message("", "not json"), "Request failed");
}

#[test]
fn build_query_skips_absent_filters() {
    assert_eq!(build_query(&[("status", None), ("agent_id", None)]), "");
    assert_eq!(
        build_query(&[("status", Some("new".to_owned())), ("agent_id", None)]),
        "?status=new"
    );
    assert_eq!(
        build_query(&[
            ("agent_id", Some("a1".to_owned())),
            ("channel", Some("whatsapp".to_owned())),
        ]),
        "?agent_id=a1&channel=whatsapp"
    );
}

#[test]
fn build_query_percent_encodes_values() {
    assert_eq!(
        build_query(&[("service_type", Some("deep clean & more".to_owned()))]),
        "?service_type=deep%20clean%20%26%20more"
    );
    assert_eq!(
        build_query(&[("status", Some("ünïcode".to_owned()))]),
        "?status=%C3%BCn%C3%AFcode"
    );
}

#[test]
fn api_base_defaults_to_local_backend() {
    // MESA_API_URL is a compile-time override; the default must point at
    // the local dev backend.
    if option_env!("MESA_API_URL").is_none() {
        assert_eq!(api_base(), "http://localhost:8000");
    }
}

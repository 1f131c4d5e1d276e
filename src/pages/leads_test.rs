use super::*;

#[test]
fn new_lead_requires_a_name() {
    assert_eq!(
        validate_new_lead("   ", "sarah@example.com", ""),
        Err("Enter the lead's name.")
    );
}

#[test]
fn new_lead_requires_some_contact_detail() {
    assert_eq!(
        validate_new_lead("Sarah J.", "  ", ""),
        Err("Enter an email or phone number.")
    );
    assert_eq!(validate_new_lead("Sarah J.", "sarah@example.com", ""), Ok(()));
    assert_eq!(validate_new_lead("Sarah J.", "", "+447700900000"), Ok(()));
}

fn lead(name: Option<&str>, status: &str, is_hot: bool, score: i64) -> Lead {
    Lead {
        id: "l1".to_owned(),
        organization_id: "org1".to_owned(),
        agent_id: None,
        name: name.map(str::to_owned),
        phone: Some("+2348012345".to_owned()),
        email: Some("sarah@example.com".to_owned()),
        notes: None,
        status: status.to_owned(),
        service_type: Some("deep_clean".to_owned()),
        service_data: serde_json::Value::Null,
        lead_score: score,
        is_hot,
        urgency: None,
        source_channel: Some("whatsapp".to_owned()),
        created_at: None,
        agents: None,
    }
}

#[test]
fn score_tiers_split_at_five_and_seven() {
    assert_eq!(score_tier(9), "high");
    assert_eq!(score_tier(7), "high");
    assert_eq!(score_tier(6), "medium");
    assert_eq!(score_tier(5), "medium");
    assert_eq!(score_tier(4), "low");
    assert_eq!(score_tier(0), "low");
}

#[test]
fn urgency_windows_get_short_labels() {
    assert_eq!(urgency_label(Some("within_48h")), Some("48h".to_owned()));
    assert_eq!(urgency_label(Some("within_7days")), Some("7 days".to_owned()));
    assert_eq!(urgency_label(Some("within_30days")), Some("30 days".to_owned()));
    assert_eq!(urgency_label(Some("flexible")), Some("Flexible".to_owned()));
    // Unknown windows pass through verbatim.
    assert_eq!(urgency_label(Some("someday")), Some("someday".to_owned()));
    assert_eq!(urgency_label(None), None);
}

#[test]
fn search_matches_any_contact_field_case_insensitively() {
    let sample = lead(Some("Sarah James"), "new", false, 3);
    assert!(matches_search(&sample, ""));
    assert!(matches_search(&sample, "sarah"));
    assert!(matches_search(&sample, "EXAMPLE.COM"));
    assert!(matches_search(&sample, "+23480"));
    assert!(matches_search(&sample, "deep"));
    assert!(!matches_search(&sample, "plumbing"));
}

#[test]
fn search_handles_missing_fields() {
    let sample = Lead {
        name: None,
        phone: None,
        email: None,
        service_type: None,
        ..lead(None, "new", false, 0)
    };
    assert!(!matches_search(&sample, "sarah"));
    assert!(matches_search(&sample, ""));
}

#[test]
fn summary_counts_hot_new_and_converted() {
    let all = vec![
        lead(Some("A"), "new", true, 8),
        lead(Some("B"), "converted", false, 5),
        lead(Some("C"), "new", false, 2),
        lead(Some("D"), "contacted", true, 7),
    ];
    assert_eq!(summarize(&all), (4, 2, 2, 1));
}

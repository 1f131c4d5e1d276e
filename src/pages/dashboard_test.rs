use super::*;

#[test]
fn known_actions_get_proper_copy() {
    assert_eq!(humanize_action("replied"), "Replied to a conversation");
    assert_eq!(humanize_action("book_appointment"), "Booked an appointment");
    assert_eq!(humanize_action("collect_lead"), "Captured a lead");
    assert_eq!(humanize_action("escalate_to_human"), "Escalated to a human");
    assert_eq!(humanize_action("rate_limited"), "Paused by rate limit");
}

#[test]
fn unknown_actions_fall_back_to_the_raw_name() {
    assert_eq!(humanize_action("flow_started"), "flow started");
    assert_eq!(humanize_action("ping"), "ping");
}

#[test]
fn feed_rows_survive_a_deleted_agent() {
    let entry = LogEntry {
        id: "l1".to_owned(),
        action: "replied".to_owned(),
        details: None,
        created_at: None,
        agents: None,
    };
    assert_eq!(feed_agent_name(&entry), "Unknown agent");
}

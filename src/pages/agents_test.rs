use super::*;
use crate::net::types::{AgentChannel, EmployeeTypeRef};

fn sample_agent() -> Agent {
    Agent {
        id: "a1".to_owned(),
        name: "amara".to_owned(),
        status: "active".to_owned(),
        custom_system_prompt: None,
        voice_config: None,
        employee_types: Some(EmployeeTypeRef {
            name: "Receptionist".to_owned(),
            description: Some("Handles bookings".to_owned()),
        }),
        agent_channels: vec![
            AgentChannel {
                channel: "whatsapp".to_owned(),
                is_enabled: true,
                config: serde_json::Value::Null,
            },
            AgentChannel {
                channel: "voice".to_owned(),
                is_enabled: false,
                config: serde_json::Value::Null,
            },
        ],
        created_at: None,
    }
}

#[test]
fn status_toggle_flips_between_active_and_paused() {
    assert_eq!(next_status("active"), "paused");
    assert_eq!(next_status("paused"), "active");
    // Anything unexpected is recoverable by activating.
    assert_eq!(next_status("draft"), "active");
}

#[test]
fn channel_lookup_respects_the_enabled_flag() {
    let agent = sample_agent();
    assert!(channel_enabled(&agent, "whatsapp"));
    assert!(!channel_enabled(&agent, "voice"));
    assert!(!channel_enabled(&agent, "email"));
}

#[test]
fn role_falls_back_when_the_type_join_is_missing() {
    let mut agent = sample_agent();
    assert_eq!(agent_role(&agent), "Receptionist");
    agent.employee_types = None;
    assert_eq!(agent_role(&agent), "Agent");
}

#[test]
fn avatar_initial_is_uppercased() {
    assert_eq!(agent_initial("amara"), "A");
    assert_eq!(agent_initial(""), "?");
}

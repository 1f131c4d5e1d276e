use super::*;

fn bare_conversation() -> Conversation {
    Conversation {
        id: "c1".to_owned(),
        agent_id: Some("a1".to_owned()),
        contact_name: None,
        contact_phone: None,
        contact_email: None,
        channel: Some("whatsapp".to_owned()),
        status: "active".to_owned(),
        updated_at: None,
        agents: None,
    }
}

#[test]
fn display_name_prefers_name_then_phone_then_email() {
    let mut conversation = bare_conversation();
    conversation.contact_name = Some("John Doe".to_owned());
    conversation.contact_phone = Some("+23480".to_owned());
    conversation.contact_email = Some("j@d.com".to_owned());
    assert_eq!(display_name(&conversation), "John Doe");

    conversation.contact_name = None;
    assert_eq!(display_name(&conversation), "+23480");

    conversation.contact_phone = None;
    assert_eq!(display_name(&conversation), "j@d.com");
}

#[test]
fn anonymous_contacts_get_a_placeholder() {
    assert_eq!(display_name(&bare_conversation()), "Unknown contact");
}

#[test]
fn assistant_messages_sit_on_the_agent_side() {
    let mut message = Message {
        id: "m1".to_owned(),
        conversation_id: "c1".to_owned(),
        role: "assistant".to_owned(),
        content: "Hello".to_owned(),
        created_at: None,
    };
    assert!(from_agent(&message));
    message.role = "user".to_owned();
    assert!(!from_agent(&message));
}

use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        organization_id: "org1".to_owned(),
        role: "owner".to_owned(),
        organizations: None,
    }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn anonymous_state_is_settled_without_user() {
    let state = AuthState::anonymous();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_state_carries_the_profile() {
    let state = AuthState::authenticated(sample_user());
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().email, "a@b.com");
}

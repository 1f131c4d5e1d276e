use super::*;
use crate::net::types::User;

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
fn protected_guard_waits_while_loading() {
    // Never a redirect and never the protected child before the
    // startup restore settles.
    assert_eq!(protected_outcome(&AuthState::loading()), GuardOutcome::Wait);
}

#[test]
fn protected_guard_allows_authenticated_sessions() {
    let state = AuthState::authenticated(sample_user());
    assert_eq!(protected_outcome(&state), GuardOutcome::Allow);
}

#[test]
fn protected_guard_redirects_anonymous_to_login() {
    assert_eq!(
        protected_outcome(&AuthState::anonymous()),
        GuardOutcome::Redirect(AUTH_ROUTE)
    );
}

#[test]
fn guest_guard_waits_while_loading() {
    assert_eq!(guest_outcome(&AuthState::loading()), GuardOutcome::Wait);
}

#[test]
fn guest_guard_redirects_authenticated_into_the_app() {
    let state = AuthState::authenticated(sample_user());
    assert_eq!(guest_outcome(&state), GuardOutcome::Redirect(APP_ROUTE));
}

#[test]
fn guest_guard_allows_anonymous_visitors() {
    assert_eq!(guest_outcome(&AuthState::anonymous()), GuardOutcome::Allow);
}

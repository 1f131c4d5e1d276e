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
fn restore_skips_probe_without_a_stored_token() {
    assert_eq!(restore_plan(None), RestorePlan::SkipProbe);
    assert_eq!(restore_plan(Some("")), RestorePlan::SkipProbe);
}

#[test]
fn restore_probes_with_a_stored_token() {
    assert_eq!(restore_plan(Some("at1")), RestorePlan::Probe);
}

#[test]
fn successful_probe_authenticates_and_keeps_tokens() {
    let (state, purge) = resolve_probe(Ok(sample_user()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(!purge);
}

#[test]
fn failed_probe_resolves_anonymous_and_purges_tokens() {
    let err = ApiError::Http {
        status: 401,
        message: "Invalid token".to_owned(),
    };
    let (state, purge) = resolve_probe(Err(err));
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(purge);
}

#[test]
fn signup_never_stores_tokens() {
    token_store::clear_tokens();

    // Signing up does not authenticate; whatever the server answers, the
    // visitor stays anonymous and walks onboarding before their first
    // login.
    let _ = futures::executor::block_on(signup("a@b.com", "longenough", "Acme"));
    assert_eq!(token_store::access_token(), None);
    assert_eq!(token_store::refresh_token(), None);
}

#[test]
fn logout_is_synchronous_and_idempotent() {
    let auth = RwSignal::new(AuthState::authenticated(sample_user()));
    token_store::store_tokens("at1", "rt1");

    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
    assert_eq!(token_store::access_token(), None);
    assert_eq!(token_store::refresh_token(), None);

    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
}

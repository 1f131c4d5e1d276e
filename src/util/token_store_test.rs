use super::*;

#[test]
fn store_then_read_returns_both_tokens() {
    clear_tokens();
    store_tokens("at1", "rt1");
    assert_eq!(access_token().as_deref(), Some("at1"));
    assert_eq!(refresh_token().as_deref(), Some("rt1"));
    clear_tokens();
}

#[test]
fn clear_is_idempotent() {
    clear_tokens();
    store_tokens("at2", "rt2");
    clear_tokens();
    clear_tokens();
    assert_eq!(access_token(), None);
    assert_eq!(refresh_token(), None);
}

#[test]
fn empty_values_read_as_absent() {
    clear_tokens();
    store_tokens("", "");
    assert_eq!(access_token(), None);
    assert_eq!(refresh_token(), None);
    clear_tokens();
}

use super::*;

#[test]
fn rejects_email_without_at_sign() {
    assert_eq!(
        validate(false, "not-an-email", "secret-pw", ""),
        Err("Enter a valid email address.")
    );
}

#[test]
fn rejects_blank_email() {
    assert_eq!(
        validate(false, "   ", "secret-pw", ""),
        Err("Enter a valid email address.")
    );
}

#[test]
fn rejects_empty_password() {
    assert_eq!(validate(false, "a@b.com", "", ""), Err("Enter your password."));
}

#[test]
fn signup_enforces_minimum_password_length() {
    assert_eq!(
        validate(true, "a@b.com", "short", "Acme"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(validate(true, "a@b.com", "longenough", "Acme"), Ok(()));
}

#[test]
fn signup_requires_an_organization_name() {
    assert_eq!(
        validate(true, "a@b.com", "longenough", "  "),
        Err("Enter your organization's name.")
    );
}

#[test]
fn login_ignores_signup_only_rules() {
    // Short password and no organization are fine when signing in.
    assert_eq!(validate(false, "a@b.com", "short", ""), Ok(()));
}

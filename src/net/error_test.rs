use super::*;

#[test]
fn http_error_displays_bare_message() {
    let err = ApiError::Http {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn network_error_passes_message_through() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn decode_error_names_the_body_problem() {
    let err = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(err.to_string(), "invalid response body: missing field `id`");
}

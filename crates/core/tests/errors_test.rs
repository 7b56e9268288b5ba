use pretty_assertions::assert_eq;
use roomly_core::errors::{ApiError, ApiResult, ValidationError};
use rstest::rstest;

#[test]
fn validation_error_display() {
    assert_eq!(
        ValidationError::PastStart.to_string(),
        "booking cannot start in the past"
    );
    assert_eq!(
        ValidationError::EndBeforeStart.to_string(),
        "booking must end after it starts"
    );
    assert_eq!(
        ValidationError::OutOfHours.to_string(),
        "bookings must fall between 07:00 and 21:00"
    );
}

#[test]
fn api_error_display() {
    assert_eq!(ApiError::AuthRequired.to_string(), "authentication required");
    assert_eq!(
        ApiError::Http { status: 500 }.to_string(),
        "request failed with HTTP 500"
    );
    assert!(
        ApiError::Validation(ValidationError::PastStart)
            .to_string()
            .starts_with("invalid booking:")
    );
}

#[rstest]
#[case(200, None)]
#[case(201, None)]
#[case(204, None)]
#[case(401, Some(true))]
#[case(403, Some(true))]
#[case(404, Some(false))]
#[case(500, Some(false))]
fn status_mapping(#[case] status: u16, #[case] expected_auth: Option<bool>) {
    match (ApiError::from_status(status), expected_auth) {
        (None, None) => {}
        (Some(ApiError::AuthRequired), Some(true)) => {}
        (Some(ApiError::Http { status: got }), Some(false)) => assert_eq!(got, status),
        (mapped, _) => panic!("unexpected mapping for {status}: {mapped:?}"),
    }
}

#[test]
fn transient_failures_may_be_retried() {
    assert!(ApiError::Http { status: 500 }.is_transient());
    assert!(
        ApiError::Transport(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        )))
        .is_transient()
    );

    let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    assert!(ApiError::Parse(parse).is_transient());

    // Retrying without logging in or fixing the candidate cannot help.
    assert!(!ApiError::AuthRequired.is_transient());
    assert!(!ApiError::Validation(ValidationError::OutOfHours).is_transient());
}

#[test]
fn validation_error_converts_into_api_error() {
    fn submit() -> ApiResult<()> {
        Err(ValidationError::EndBeforeStart)?
    }

    let err = submit().unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::EndBeforeStart)
    ));
}

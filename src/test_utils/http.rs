use axum_test::TestResponse;
use serde_json::Value;

/// Assert that the response is a validation error with at least one message
/// for `field`.
#[track_caller]
pub(crate) fn assert_field_error(response: &TestResponse, field: &str) {
    let body: Value = response.json();

    assert_eq!(body["message"], "The given data was invalid.");
    let messages = body["errors"][field].as_array();
    assert!(
        messages.is_some_and(|messages| !messages.is_empty()),
        "want an error for the field {field:?}, got {body}"
    );
}

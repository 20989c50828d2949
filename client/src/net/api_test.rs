use super::*;
use futures::executor::block_on;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn login_body_nests_credentials_under_user() {
    let creds = Credentials { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(login_body(&creds)).unwrap();
    assert_eq!(value["user"]["email"], "a@b.c");
    assert_eq!(value["user"]["password"], "pw");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_failure_forbidden_ignores_body() {
    assert_eq!(classify_failure(403, r#"{"detail":"nope"}"#), ApiError::Forbidden);
}

#[test]
fn classify_failure_uses_server_message() {
    let body = r#"{"user":{"errors":{"error":["Invalid login or password"]}}}"#;
    assert_eq!(classify_failure(400, body), ApiError::Rejected("Invalid login or password".to_owned()));
}

#[test]
fn classify_failure_falls_back_to_status() {
    assert_eq!(classify_failure(500, "<html>oops</html>"), ApiError::Status(500));
    assert_eq!(classify_failure(502, ""), ApiError::Status(502));
}

#[test]
fn user_message_shows_rejection_text_only() {
    assert_eq!(ApiError::Rejected("User is inactive".to_owned()).user_message(), "User is inactive");
    assert_eq!(ApiError::Status(500).user_message(), SERVER_ERROR_MESSAGE);
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), SERVER_ERROR_MESSAGE);
    assert_eq!(ApiError::Forbidden.user_message(), SERVER_ERROR_MESSAGE);
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_login_returns_user() {
    let user = decode_login(r#"{"user":{"email":"qa@thanqa.dev","token":"t0k"}}"#).unwrap();
    assert_eq!(user.email, "qa@thanqa.dev");
    assert_eq!(user.token, "t0k");
}

#[test]
fn decode_login_surfaces_errors_in_success_body() {
    let err = decode_login(r#"{"user":{"errors":{"password":"Enter your password"}}}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Enter your password".to_owned()));
}

#[test]
fn decode_login_rejects_empty_token() {
    assert!(matches!(
        decode_login(r#"{"user":{"email":"qa@thanqa.dev","token":""}}"#),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn decode_login_rejects_non_json() {
    assert!(matches!(decode_login("not json"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_current_plan_handles_empty_indicator() {
    assert_eq!(decode_current_plan(r#"{"test_plan":{}}"#).unwrap(), None);
    let plan = decode_current_plan(r#"{"test_plan":{"test_plan_id":3,"title":"Smoke"}}"#)
        .unwrap()
        .unwrap();
    assert_eq!(plan.title, "Smoke");
}

#[test]
fn decode_current_plan_reports_malformed_plan() {
    let body = r#"{"test_plan":{"test_plan_id":3,"title":"Smoke","author":"Ada Lovelace"}}"#;
    assert!(matches!(decode_current_plan(body), Err(ApiError::Decode(_))));
    let body = r#"{"test_plan":[{"test_plan_id":3,"title":null}]}"#;
    assert!(matches!(decode_plans(body), Err(ApiError::Decode(_))));
}

#[test]
fn decode_users_and_plans() {
    let users = decode_users(r#"{"users":[{"id":4,"first_name":"Lin","last_name":"Ma"}]}"#).unwrap();
    assert_eq!(users[0].id, 4);
    let plans = decode_plans(r#"{"test_plan":[{"test_plan_id":1,"title":"A"}]}"#).unwrap();
    assert_eq!(plans.len(), 1);
    assert!(matches!(decode_users("null"), Err(ApiError::Decode(_))));
}

// =============================================================
// Non-browser stubs
// =============================================================

#[test]
fn calls_are_unavailable_outside_browser() {
    let creds = Credentials { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert_eq!(block_on(login(&creds)), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_current_test_plan("t")), Err(ApiError::Unavailable));
}

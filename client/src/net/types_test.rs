use super::*;
use serde_json::json;

// =============================================================
// Login envelope
// =============================================================

#[test]
fn login_request_wraps_credentials_in_user() {
    let creds = Credentials { email: "qa@thanqa.dev".to_owned(), password: "hunter2".to_owned() };
    let body = serde_json::to_value(LoginRequest { user: &creds }).unwrap();
    assert_eq!(body, json!({ "user": { "email": "qa@thanqa.dev", "password": "hunter2" } }));
}

#[test]
fn logged_in_user_decodes_from_envelope() {
    let raw = r#"{"user":{"email":"qa@thanqa.dev","username":"qa","token":"abc.def"}}"#;
    let env: UserEnvelope<LoggedInUser> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.user.email, "qa@thanqa.dev");
    assert_eq!(env.user.token, "abc.def");
    assert_eq!(env.user.username.as_deref(), Some("qa"));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn extract_error_message_reads_user_errors_list() {
    let body = json!({ "user": { "errors": { "non_field_errors": ["Invalid login or password"] } } });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Invalid login or password"));
}

#[test]
fn extract_error_message_prefers_error_then_email_then_password() {
    let body = json!({ "user": { "errors": {
        "password": "Enter your password",
        "email": ["Enter your E-mail"],
    } } });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Enter your E-mail"));

    let body = json!({ "user": { "errors": { "error": "Boom", "email": "Enter your E-mail" } } });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Boom"));
}

#[test]
fn extract_error_message_falls_back_to_any_field() {
    let body = json!({ "test_plan": { "errors": { "title": ["Title is required"] } } });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Title is required"));
}

#[test]
fn extract_error_message_reads_detail() {
    let body = json!({ "detail": "Authentication credentials were not provided." });
    assert_eq!(
        extract_error_message(&body).as_deref(),
        Some("Authentication credentials were not provided.")
    );
}

#[test]
fn extract_error_message_none_for_unrelated_body() {
    assert_eq!(extract_error_message(&json!({ "ok": true })), None);
    assert_eq!(extract_error_message(&json!({ "errors": { "email": [] } })), None);
}

// =============================================================
// Users
// =============================================================

#[test]
fn users_response_decodes_and_formats_names() {
    let raw = r#"{"users":[{"id":1,"first_name":"Ada","last_name":"Lovelace"},{"id":2,"first_name":"Grace","last_name":""}]}"#;
    let resp: UsersResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.users.len(), 2);
    assert_eq!(resp.users[0].full_name(), "Ada Lovelace");
    assert_eq!(resp.users[1].full_name(), "Grace");
}

// =============================================================
// Test plans
// =============================================================

#[test]
fn current_plan_decodes_plan_object() {
    let raw = r#"{"test_plan":{"test_plan_id":7,"title":"Sprint 12","start_date":"2024-05-01T00:00:00Z","end_date":null}}"#;
    let resp: CurrentTestPlanResponse = serde_json::from_str(raw).unwrap();
    let plan = resp.test_plan.unwrap();
    assert_eq!(plan.test_plan_id, 7);
    assert_eq!(plan.title, "Sprint 12");
    assert_eq!(plan.start_date.as_deref(), Some("2024-05-01T00:00:00Z"));
    assert_eq!(plan.end_date, None);
}

#[test]
fn current_plan_empty_indicators_decode_to_none() {
    for raw in [
        r#"{"test_plan":null}"#,
        r#"{"test_plan":{}}"#,
        r#"{"test_plan":[]}"#,
        r#"{"test_plan":"No current test plan"}"#,
        r"{}",
    ] {
        let resp: CurrentTestPlanResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.test_plan.is_none(), "expected empty indicator for {raw}");
    }
}

#[test]
fn plan_list_accepts_id_alias_and_skips_garbage() {
    let raw = r#"{"test_plan":[{"id":1,"title":"A"},{"test_plan_id":2,"title":"B","is_current":true},"junk"]}"#;
    let resp: TestPlansResponse = serde_json::from_str(raw).unwrap();
    let ids: Vec<i64> = resp.test_plan.iter().map(|p| p.test_plan_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(resp.test_plan[1].is_current);
}

#[test]
fn current_plan_with_id_but_bad_fields_is_an_error() {
    for raw in [
        r#"{"test_plan":{"test_plan_id":7,"title":null}}"#,
        r#"{"test_plan":{"test_plan_id":7,"title":"Smoke","author":"Ada Lovelace"}}"#,
        r#"{"test_plan":{"id":7}}"#,
    ] {
        let err = serde_json::from_str::<CurrentTestPlanResponse>(raw);
        assert!(err.is_err(), "expected decode failure for {raw}");
    }
}

#[test]
fn current_plan_with_null_id_is_empty_indicator() {
    let resp: CurrentTestPlanResponse =
        serde_json::from_str(r#"{"test_plan":{"test_plan_id":null,"title":"Ghost"}}"#).unwrap();
    assert!(resp.test_plan.is_none());
}

#[test]
fn plan_list_fails_on_malformed_plan_with_id() {
    let raw = r#"{"test_plan":[{"id":1,"title":"A"},{"test_plan_id":2,"title":"B","author":"Ada Lovelace"}]}"#;
    assert!(serde_json::from_str::<TestPlansResponse>(raw).is_err());
}

#[test]
fn new_test_plan_serializes_nulls() {
    let plan = NewTestPlan { title: "Release".to_owned(), is_current: true, ..NewTestPlan::default() };
    assert_eq!(
        serde_json::to_value(&plan).unwrap(),
        json!({
            "title": "Release",
            "description": null,
            "is_current": true,
            "start_date": null,
            "end_date": null,
            "author": null,
        })
    );
}

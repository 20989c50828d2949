use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn validate_login_trims_email_and_keeps_password() {
    let creds = validate_login("  qa@thanqa.dev ", " pass word ").unwrap();
    assert_eq!(creds.email, "qa@thanqa.dev");
    assert_eq!(creds.password, " pass word ");
}

#[test]
fn validate_login_reports_missing_email() {
    assert_eq!(
        validate_login("", "secret"),
        Err(LoginFieldErrors { email: Some(EMAIL_REQUIRED), password: None })
    );
}

#[test]
fn validate_login_reports_both_fields_at_once() {
    assert_eq!(
        validate_login("   ", "  "),
        Err(LoginFieldErrors { email: Some(EMAIL_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
}

// =============================================================
// Test plan
// =============================================================

fn draft(title: &str, start: &str, end: &str) -> TestPlanDraft {
    TestPlanDraft {
        title: title.to_owned(),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
        ..TestPlanDraft::default()
    }
}

#[test]
fn validate_test_plan_builds_request() {
    let mut d = draft(" Regression ", "2024-05-01", "2024-05-14");
    d.description = "  full pass ".to_owned();
    d.author = Some(3);
    d.is_current = true;
    let plan = validate_test_plan(&d).unwrap();
    assert_eq!(plan.title, "Regression");
    assert_eq!(plan.description.as_deref(), Some("full pass"));
    assert_eq!(plan.start_date.as_deref(), Some("2024-05-01T00:00:00Z"));
    assert_eq!(plan.end_date.as_deref(), Some("2024-05-14T00:00:00Z"));
    assert_eq!(plan.author, Some(3));
    assert!(plan.is_current);
}

#[test]
fn validate_test_plan_allows_missing_dates_and_description() {
    let plan = validate_test_plan(&draft("Smoke", "", "")).unwrap();
    assert_eq!(plan.start_date, None);
    assert_eq!(plan.end_date, None);
    assert_eq!(plan.description, None);
}

#[test]
fn validate_test_plan_requires_title() {
    assert_eq!(
        validate_test_plan(&draft("  ", "", "")),
        Err(PlanFieldErrors { title: Some(TITLE_REQUIRED), dates: None })
    );
}

#[test]
fn validate_test_plan_rejects_reversed_dates() {
    assert_eq!(
        validate_test_plan(&draft("Smoke", "2024-05-14", "2024-05-01")),
        Err(PlanFieldErrors { title: None, dates: Some(INCORRECT_DATE) })
    );
}

#[test]
fn validate_test_plan_same_day_is_fine() {
    assert!(validate_test_plan(&draft("Smoke", "2024-05-01", "2024-05-01")).is_ok());
}

#[test]
fn validate_test_plan_rejects_malformed_date_and_reports_title_too() {
    assert_eq!(
        validate_test_plan(&draft("", "tomorrow", "")),
        Err(PlanFieldErrors { title: Some(TITLE_REQUIRED), dates: Some(INCORRECT_DATE) })
    );
}

//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Messages match the API's own validation wording so the user sees the same
//! text whether a check fails in the browser or on the server. Field errors
//! are rendered under the offending input and cleared on its next input event.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, NewTestPlan};
use crate::util::dates;

pub const EMAIL_REQUIRED: &str = "Enter your E-mail";
pub const PASSWORD_REQUIRED: &str = "Enter your password";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const INCORRECT_DATE: &str = "Incorrect date";

/// Per-field messages for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Per-field messages for the create-test-plan form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanFieldErrors {
    pub title: Option<&'static str>,
    pub dates: Option<&'static str>,
}

/// Raw create-test-plan form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestPlanDraft {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub author: Option<i64>,
    pub is_current: bool,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Presence check for both login fields. The email is trimmed; the password
/// is sent verbatim.
///
/// # Errors
///
/// Returns every missing field at once.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let errors = LoginFieldErrors {
        email: is_blank(email).then_some(EMAIL_REQUIRED),
        password: is_blank(password).then_some(PASSWORD_REQUIRED),
    };
    if errors != LoginFieldErrors::default() {
        return Err(errors);
    }
    Ok(Credentials { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Turn form values into a create request.
///
/// # Errors
///
/// Missing title, a malformed date, or a start date after the end date.
pub fn validate_test_plan(draft: &TestPlanDraft) -> Result<NewTestPlan, PlanFieldErrors> {
    let mut errors = PlanFieldErrors::default();
    if is_blank(&draft.title) {
        errors.title = Some(TITLE_REQUIRED);
    }

    let start = optional_date(&draft.start_date);
    let end = optional_date(&draft.end_date);
    let period = match (start, end) {
        (Ok(Some(s)), Ok(Some(e))) if s > e => None,
        (Ok(s), Ok(e)) => Some((s, e)),
        _ => None,
    };
    if period.is_none() {
        errors.dates = Some(INCORRECT_DATE);
    }

    match period {
        Some((start, end)) if errors.title.is_none() => Ok(NewTestPlan {
            title: draft.title.trim().to_owned(),
            description: Some(draft.description.trim().to_owned()).filter(|d| !d.is_empty()),
            is_current: draft.is_current,
            start_date: start.and_then(dates::to_api_datetime),
            end_date: end.and_then(dates::to_api_datetime),
            author: draft.author,
        }),
        _ => Err(errors),
    }
}

/// Blank is allowed; anything else must be a `YYYY-MM-DD` date.
fn optional_date(raw: &str) -> Result<Option<time::Date>, ()> {
    if is_blank(raw) {
        return Ok(None);
    }
    dates::parse_input_date(raw).map(Some).ok_or(())
}

//! Wire DTOs for the ThanQA REST API.
//!
//! DESIGN
//! ======
//! The API wraps every payload in a resource envelope (`user`, `users`,
//! `test_plan`). Decoding is lenient where the server is loose: the current
//! plan endpoint may answer with an empty indicator instead of a plan, and
//! validation errors may be a string or a list of strings per field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Login form values after validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/users/login/` request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub user: &'a Credentials,
}

/// Authenticated identity returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoggedInUser {
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Generic `{ "user": ... }` envelope.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

/// An entry of `GET /api/users/all/`, used as a test-plan author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserSummary {
    /// Display name as `"first last"`, without stray spaces when a part is blank.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserSummary>,
}

/// A test plan as returned by the test-plan endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlan {
    #[serde(alias = "id")]
    pub test_plan_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub author: Option<i64>,
}

/// `GET /api/testplan/current/` response.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentTestPlanResponse {
    #[serde(default, deserialize_with = "deserialize_optional_plan")]
    pub test_plan: Option<TestPlan>,
}

/// `GET /api/testplan/all/` response.
#[derive(Debug, Default, Deserialize)]
pub struct TestPlansResponse {
    #[serde(default, deserialize_with = "deserialize_plan_list")]
    pub test_plan: Vec<TestPlan>,
}

/// `POST /api/testplan/create/` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewTestPlan {
    pub title: String,
    pub description: Option<String>,
    pub is_current: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub author: Option<i64>,
}

/// Anything without a plan id (`null`, `{}`, `[]`, a message) is the
/// server's "no current plan" indicator. A payload that carries an id must
/// decode fully.
fn deserialize_optional_plan<'de, D>(deserializer: D) -> Result<Option<TestPlan>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    plan_from_value(raw).map_err(D::Error::custom)
}

fn deserialize_plan_list<'de, D>(deserializer: D) -> Result<Vec<TestPlan>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let items = match raw {
        Value::Array(items) => items,
        other => vec![other],
    };
    let mut plans = Vec::with_capacity(items.len());
    for item in items {
        if let Some(plan) = plan_from_value(item).map_err(D::Error::custom)? {
            plans.push(plan);
        }
    }
    Ok(plans)
}

fn has_plan_id(raw: &Value) -> bool {
    ["test_plan_id", "id"]
        .iter()
        .any(|key| raw.get(*key).is_some_and(|id| !id.is_null()))
}

fn plan_from_value(raw: Value) -> Result<Option<TestPlan>, serde_json::Error> {
    if !raw.is_object() || !has_plan_id(&raw) {
        return Ok(None);
    }
    serde_json::from_value(raw).map(Some)
}

/// Field keys checked first when picking the message to show for a
/// validation failure.
const PRIORITY_ERROR_KEYS: [&str; 4] = ["error", "email", "password", "non_field_errors"];

/// Extract a human-readable message from an API error body.
///
/// Understands `{ "user": { "errors": ... } }`, `{ "test_plan": { "errors": ... } }`,
/// bare `{ "errors": ... }` and DRF's `{ "detail": "..." }`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let errors = body
        .pointer("/user/errors")
        .or_else(|| body.pointer("/test_plan/errors"))
        .or_else(|| body.get("errors"));
    if let Some(errors) = errors {
        return message_from_errors(errors);
    }
    body.get("detail").and_then(first_text)
}

fn message_from_errors(errors: &Value) -> Option<String> {
    match errors {
        Value::Object(fields) => PRIORITY_ERROR_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(first_text))
            .or_else(|| fields.values().find_map(first_text)),
        other => first_text(other),
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

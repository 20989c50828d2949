//! REST client for the ThanQA API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call returns `ApiError::Unavailable`,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result` with a single failure branch. A 403 is
//! surfaced as `ApiError::Forbidden` so callers can drop the stored session;
//! anything else collapses to a banner message via `ApiError::user_message`.
//! There is no retry, timeout, or request de-duplication.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoggedInUser, NewTestPlan, TestPlan, UserSummary};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{
    CurrentTestPlanResponse, LoginRequest, TestPlansResponse, UserEnvelope, UsersResponse, extract_error_message,
};

/// Banner text for every failure the server did not explain.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// HTTP 403: the stored token is no longer accepted.
    #[error("access forbidden")]
    Forbidden,

    /// The server rejected the request with an explanation.
    #[error("{0}")]
    Rejected(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            _ => SERVER_ERROR_MESSAGE.to_owned(),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success response to an error, preferring the server's own message.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 403 {
        return ApiError::Forbidden;
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| extract_error_message(&value))
        .map_or(ApiError::Status(status), ApiError::Rejected)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_login(body: &str) -> Result<LoggedInUser, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(message) = extract_error_message(&value) {
        return Err(ApiError::Rejected(message));
    }
    let envelope: UserEnvelope<LoggedInUser> =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.user.token.is_empty() {
        return Err(ApiError::Decode("login response carried an empty token".to_owned()));
    }
    Ok(envelope.user)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_users(body: &str) -> Result<Vec<UserSummary>, ApiError> {
    serde_json::from_str::<UsersResponse>(body)
        .map(|resp| resp.users)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_current_plan(body: &str) -> Result<Option<TestPlan>, ApiError> {
    serde_json::from_str::<CurrentTestPlanResponse>(body)
        .map(|resp| resp.test_plan)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_plans(body: &str) -> Result<Vec<TestPlan>, ApiError> {
    serde_json::from_str::<TestPlansResponse>(body)
        .map(|resp| resp.test_plan)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_body(credentials: &Credentials) -> LoginRequest<'_> {
    LoginRequest { user: credentials }
}

/// Send a prepared request and return the body of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<String, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !resp.ok() {
        return Err(classify_failure(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
fn authorized_get(path: &str, token: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::get(&crate::config::endpoint(path))
        .header("Authorization", &bearer(token))
        .header("Content-Type", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Exchange credentials for a bearer token via `POST /api/users/login/`.
///
/// # Errors
///
/// `Rejected` carries the server's validation message (e.g. "Invalid login or password").
pub async fn login(credentials: &Credentials) -> Result<LoggedInUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&crate::config::endpoint(crate::config::LOGIN_ENDPOINT))
            .json(&login_body(credentials))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = send(request).await?;
        decode_login(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// List candidate test-plan authors via `GET /api/users/all/`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn fetch_users(token: &str) -> Result<Vec<UserSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(authorized_get(crate::config::USERS_ENDPOINT, token)?).await?;
        decode_users(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the active test plan via `GET /api/testplan/current/`.
/// `Ok(None)` means the server reported no current plan.
///
/// # Errors
///
/// Returns `Forbidden` on 403 and other variants on transport/status failure.
pub async fn fetch_current_test_plan(token: &str) -> Result<Option<TestPlan>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(authorized_get(crate::config::CURRENT_TEST_PLAN_ENDPOINT, token)?).await?;
        decode_current_plan(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every test plan via `GET /api/testplan/all/`.
///
/// # Errors
///
/// Returns `Forbidden` on 403 and other variants on transport/status failure.
pub async fn fetch_all_test_plans(token: &str) -> Result<Vec<TestPlan>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(authorized_get(crate::config::ALL_TEST_PLANS_ENDPOINT, token)?).await?;
        decode_plans(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a test plan via `POST /api/testplan/create/`.
///
/// # Errors
///
/// `Rejected` carries the server's validation message (e.g. "No such author").
pub async fn create_test_plan(token: &str, plan: &NewTestPlan) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&crate::config::endpoint(crate::config::CREATE_TEST_PLAN_ENDPOINT))
            .header("Authorization", &bearer(token))
            .json(plan)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, plan);
        Err(ApiError::Unavailable)
    }
}

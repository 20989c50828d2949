//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The ThanQA REST API lives on a separate origin. Its base URL is baked into
//! the WASM bundle at build time via `THANQA_API_BASE_URL`, falling back to the
//! local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Development API origin used when `THANQA_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Local-storage key holding the serialized auth record.
pub const AUTH_STORAGE_KEY: &str = "auth";

/// How long a notification banner stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 2000;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub const LOGIN_ENDPOINT: &str = "/api/users/login/";
pub const USERS_ENDPOINT: &str = "/api/users/all/";
pub const CURRENT_TEST_PLAN_ENDPOINT: &str = "/api/testplan/current/";
pub const ALL_TEST_PLANS_ENDPOINT: &str = "/api/testplan/all/";
pub const CREATE_TEST_PLAN_ENDPOINT: &str = "/api/testplan/create/";

/// API base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("THANQA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Absolute URL for an API `path` such as `/api/users/all/`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

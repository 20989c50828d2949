//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and the dashboard to coordinate login redirects and
//! bearer-token lookup. The persisted form lives in `util::auth_storage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Persisted authentication record, stored as JSON under the `auth` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    /// Email of the signed-in user.
    pub user: String,
    /// Opaque bearer token issued by the login endpoint.
    pub token: String,
}

impl AuthRecord {
    /// A record only counts when both halves are present.
    pub fn is_complete(&self) -> bool {
        !self.user.trim().is_empty() && !self.token.trim().is_empty()
    }
}

/// Authentication state tracking the stored record and loading status.
///
/// `loading` stays `true` until local storage has been read in the browser,
/// so server rendering never redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub record: Option<AuthRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { record: None, loading: true }
    }
}

impl AuthState {
    /// State after reading storage.
    pub fn loaded(record: Option<AuthRecord>) -> Self {
        Self { record: record.filter(AuthRecord::is_complete), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.record.is_some()
    }

    /// Bearer token for API calls, if signed in.
    pub fn token(&self) -> Option<String> {
        self.record.as_ref().map(|r| r.token.clone())
    }

    pub fn user_email(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.user.as_str())
    }
}

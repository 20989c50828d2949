//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, the sidebar logout and every 403 handler must apply
//! identical session teardown and redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::util::auth_storage;

/// True once storage has been read and no usable record was found.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Populate `auth` from local storage. Runs only in the browser.
pub fn hydrate_auth_state(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        auth.set(AuthState::loaded(auth_storage::load()));
    });
}

/// Redirect to the login page whenever auth has loaded and no record is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Drop the stored session and return to the login page.
///
/// Used for logout and for any 403 from an authenticated endpoint.
pub fn expire_session<F>(auth: RwSignal<AuthState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    auth_storage::clear();
    auth.set(AuthState::loaded(None));
    navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
}

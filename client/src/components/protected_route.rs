//! Route guard for authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the persisted auth record on mount and redirects to the login page
//! when it is missing. Server rendering always produces the placeholder since
//! storage is browser-only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{hydrate_auth_state, install_unauth_redirect};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    hydrate_auth_state(auth);
    install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="thanqa-guard">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

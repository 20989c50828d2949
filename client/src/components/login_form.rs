//! Email + password sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates presence client-side, exchanges credentials for a bearer token,
//! persists the auth record and navigates to the dashboard. Server failures
//! surface as an error banner; empty fields as inline text that clears on the
//! next keystroke in that field.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;
use crate::util::validation::{LoginFieldErrors, validate_login};

/// What a submit should do before any request is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginSubmit {
    /// Show these inline errors and stop.
    Invalid(LoginFieldErrors),
    /// A login request is already in flight.
    Busy,
    Send(Credentials),
}

/// Validation runs first, so a busy form still reports empty fields.
pub fn prepare_login(email: &str, password: &str, busy: bool) -> LoginSubmit {
    match validate_login(email, password) {
        Err(field_errors) => LoginSubmit::Invalid(field_errors),
        Ok(_) if busy => LoginSubmit::Busy,
        Ok(credentials) => LoginSubmit::Send(credentials),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginFieldErrors::default());
    let validated = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        validated.set(true);

        let credentials = match prepare_login(&email.get_untracked(), &password.get_untracked(), busy.get_untracked())
        {
            LoginSubmit::Send(credentials) => credentials,
            LoginSubmit::Invalid(field_errors) => {
                errors.set(field_errors);
                return;
            }
            LoginSubmit::Busy => return,
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::AuthRecord;
            use crate::state::notifications::NotificationKind;
            use crate::util::auth_storage;
            use crate::util::notify::{LOGIN_SUCCESS_MESSAGE, show_error, show_notification};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(user) => {
                        let record = AuthRecord { user: user.email, token: user.token };
                        auth_storage::save(&record);
                        auth.set(AuthState::loaded(Some(record)));
                        show_notification(notifications, NotificationKind::Success, LOGIN_SUCCESS_MESSAGE);
                        navigate(crate::config::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        show_error(notifications, e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, notifications, &navigate);
            busy.set(false);
        }
    };

    view! {
        <form
            id="loginForm"
            class="loginForm"
            class:loginForm--validated=move || validated.get()
            novalidate=true
            on:submit=on_submit
        >
            <div class="sign-in-icon"></div>
            <div class="sign-in">
                <h2 class="sign-in">"Sign in"</h2>
            </div>

            <input
                id="loginInput"
                type="text"
                placeholder="Enter your E-mail"
                class="input-qa"
                autocomplete="username"
                prop:value=move || email.get()
                on:input=move |ev| {
                    email.set(event_target_value(&ev));
                    errors.update(|e| e.email = None);
                }
            />
            <FieldError message=Signal::derive(move || errors.get().email)/>

            <div class="password-field">
                <input
                    id="passwordInput"
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Enter your password"
                    class="input-qa"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        errors.update(|e| e.password = None);
                    }
                />
                <button
                    type="button"
                    class="password-visibility"
                    class:password-visibility--shown=move || show_password.get()
                    title=move || if show_password.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| show_password.update(|v| *v = !*v)
                ></button>
            </div>
            <FieldError message=Signal::derive(move || errors.get().password)/>

            <button id="enterButton" class="enter-button" type="submit" disabled=move || busy.get()>
                <h5>"Enter"</h5>
            </button>
            <h2>
                <a class="forgot-password" href="#">"Forgot your password?"</a>
            </h2>
        </form>
    }
}

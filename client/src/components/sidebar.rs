//! Dashboard navigation rail.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::expire_session;

/// Icon that swaps to its `-on-hover` class while the pointer is over it.
#[component]
fn HoverIcon(base: &'static str, #[prop(optional)] title: &'static str) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let class = move || {
        if hovered.get() {
            format!("{base}-on-hover")
        } else {
            format!("{base}-initial")
        }
    };

    view! {
        <div
            class=class
            title=title
            on:mousemove=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        ></div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        leptos::logging::log!("signing out");
        expire_session(auth, &navigate);
    };

    view! {
        <div class="thanqa-sidebar">
            <div class="thanqa-sidebar-icon"></div>
            <a class="thanqa-home-icon" href=crate::config::HOME_PATH title="Home"></a>
            <div class="thanqa-user" title=move || auth.with(|a| a.user_email().unwrap_or_default().to_owned())>
                <HoverIcon base="thanqa-user-icon" title="Profile"/>
            </div>
            <HoverIcon base="thanqa-settings-icon" title="Settings"/>
            <div class="thanqa-exit" on:click=on_logout>
                <HoverIcon base="thanqa-exit-icon" title="Sign out"/>
            </div>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification_host::NotificationHost;
use crate::pages::{dashboard::MainPage, login::LoginPage};
use crate::state::{auth::AuthState, notifications::NotificationState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and notification contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(auth);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/thanqa.css"/>
        <Title text="ThanQA"/>

        <div id="root">
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=MainPage/>
                </Routes>
            </Router>
        </div>
        <NotificationHost/>
    }
}

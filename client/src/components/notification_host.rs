//! Renders the on-screen success/error banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Banners are pushed by `util::notify::show_notification` from anywhere in
//! the app and removed by its timer; this component only mirrors the list.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-host" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    view! {
                        <div id=n.kind.element_id() class=n.kind.class_name()>
                            <p class="notification__text">{n.text}</p>
                            <div class=n.kind.icon_class_name()></div>
                        </div>
                    }
                }
            />
        </div>
    }
}

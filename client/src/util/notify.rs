//! Timed banner helper.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::NOTIFICATION_TIMEOUT_MS;
use crate::state::notifications::{NotificationKind, NotificationState};

/// Text shown after a successful sign-in.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Authorization successful";

/// Show a banner and dismiss it after `NOTIFICATION_TIMEOUT_MS`.
/// Returns the banner id.
pub fn show_notification(
    notifications: RwSignal<NotificationState>,
    kind: NotificationKind,
    text: impl Into<String>,
) -> u64 {
    let mut id = 0;
    let text = text.into();
    notifications.update(|n| id = n.push(kind, text));

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
        let _ = notifications.try_update(|n| n.dismiss(id));
    })
    .forget();

    id
}

/// Show the error banner for a failed request.
pub fn show_error(notifications: RwSignal<NotificationState>, text: impl Into<String>) -> u64 {
    show_notification(notifications, NotificationKind::Error, text)
}

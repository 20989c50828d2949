//! Transient success/error banners.
//!
//! DESIGN
//! ======
//! Banners are plain data here; `components::notification_host` renders them
//! and `util::notify` schedules their removal. Ids are monotonic so a timer
//! firing late never removes a newer banner.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Banner flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// DOM id of the banner element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Success => "successNotification",
            Self::Error => "errorNotification",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification__successful",
            Self::Error => "notification__error",
        }
    }

    pub fn icon_class_name(self) -> &'static str {
        match self {
            Self::Success => "notification__successful__icon",
            Self::Error => "notification__error__icon",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Banners currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Add a banner and return its id.
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, text: text.into() });
        id
    }

    /// Remove a banner. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

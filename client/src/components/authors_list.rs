//! Author picker for the create-test-plan modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `GET /api/users/all/` once on mount. A failed fetch leaves the list
//! empty and shows the generic error banner.

#[cfg(test)]
#[path = "authors_list_test.rs"]
mod authors_list_test;

use leptos::prelude::*;

use crate::net::types::UserSummary;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;

pub const AUTHOR_PLACEHOLDER: &str = "Select author";

/// Label for the author field: the chosen user's name or the placeholder.
pub fn author_label(users: &[UserSummary], selected: Option<i64>) -> String {
    selected
        .and_then(|id| users.iter().find(|u| u.id == id))
        .map_or_else(|| AUTHOR_PLACEHOLDER.to_owned(), UserSummary::full_name)
}

#[component]
pub fn AuthorsList(selected: RwSignal<Option<i64>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let users = RwSignal::new(Vec::<UserSummary>::new());
    let expanded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = auth.get_untracked().token() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_users(&token).await {
                    Ok(list) => users.set(list),
                    Err(e) => {
                        leptos::logging::warn!("author list fetch failed: {e}");
                        crate::util::notify::show_error(notifications, crate::net::api::SERVER_ERROR_MESSAGE);
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, notifications);
    }

    view! {
        <div class="thanqa-modal-author" on:click=move |_| expanded.update(|v| *v = !*v)>
            <span
                class="thanqa-modal-author-placeholder"
                class:thanqa-modal-author-placeholder--chosen=move || selected.get().is_some()
            >
                {move || users.with(|list| author_label(list, selected.get()))}
            </span>
        </div>
        <Show when=move || expanded.get()>
            <div class="thanqa-authors-list">
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user| {
                        let id = user.id;
                        let hovered = RwSignal::new(false);
                        view! {
                            <div
                                class="thanqa-author-field"
                                class:thanqa-author-field--hover=move || hovered.get()
                                class:thanqa-author-field--selected=move || selected.get() == Some(id)
                                on:mousemove=move |_| hovered.set(true)
                                on:mouseleave=move |_| hovered.set(false)
                                on:click=move |_| {
                                    selected.set(Some(id));
                                    expanded.set(false);
                                }
                            >
                                <span class="thanqa-author">{user.full_name()}</span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

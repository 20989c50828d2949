use leptos::prelude::*;

/// Panel heading used across the dashboard.
#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! { <p class="thanqa-text">{title}</p> }
}

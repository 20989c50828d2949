//! Inline validation message rendered under a form field.

use leptos::prelude::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="thanqa-field-error" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

//! Modal form for creating a test plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the "Current Test Plan" panel when no plan is active. On
//! success the panel is asked to refetch; a 403 ends the session like every
//! other authenticated call.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::authors_list::AuthorsList;
use crate::components::field_error::FieldError;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;
use crate::util::validation::{PlanFieldErrors, TestPlanDraft, validate_test_plan};

pub const PLAN_CREATED_MESSAGE: &str = "Test plan created";

#[component]
pub fn CreateTestPlanModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let author = RwSignal::new(None::<i64>);
    let is_current = RwSignal::new(false);
    let errors = RwSignal::new(PlanFieldErrors::default());
    let busy = RwSignal::new(false);
    let close_hovered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = TestPlanDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            author: author.get_untracked(),
            is_current: is_current.get_untracked(),
        };
        let plan = match validate_test_plan(&draft) {
            Ok(plan) => plan,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.get_untracked().token() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::notifications::NotificationKind;
            use crate::util::notify::{show_error, show_notification};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_test_plan(&token, &plan).await {
                    Ok(()) => {
                        show_notification(notifications, NotificationKind::Success, PLAN_CREATED_MESSAGE);
                        on_created.run(());
                    }
                    Err(e) if e.is_forbidden() => crate::util::auth::expire_session(auth, &navigate),
                    Err(e) => {
                        leptos::logging::warn!("test plan create failed: {e}");
                        show_error(notifications, e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, plan, notifications, &navigate, on_created);
            busy.set(false);
        }
    };

    view! {
        <div id="createTestPlan" class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                id="createTestPlanModal"
                class="thanqa-create-test-plan"
                novalidate=true
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <div
                    class=move || if close_hovered.get() { "thanqa-close-modal-on-hover" } else { "thanqa-close-modal" }
                    title="Close"
                    on:mousemove=move |_| close_hovered.set(true)
                    on:mouseleave=move |_| close_hovered.set(false)
                    on:click=move |_| on_close.run(())
                ></div>
                <p class="thanqa-modal-header">"Create Test Plan"</p>

                <p class="thanqa-modal-input-title-description">"Title"</p>
                <input
                    class="thanqa-modal-title-input"
                    placeholder="Enter test plan title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        title.set(event_target_value(&ev));
                        errors.update(|e| e.title = None);
                    }
                />
                <FieldError message=Signal::derive(move || errors.get().title)/>

                <p class="thanqa-modal-datepicker-description">"Date"</p>
                <div class="thanqa-datepicker-background">
                    <input
                        class="thanqa-datepicker-input"
                        type="date"
                        title="Start date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| {
                            start_date.set(event_target_value(&ev));
                            errors.update(|e| e.dates = None);
                        }
                    />
                    <input
                        class="thanqa-datepicker-input"
                        type="date"
                        title="End date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| {
                            end_date.set(event_target_value(&ev));
                            errors.update(|e| e.dates = None);
                        }
                    />
                </div>
                <FieldError message=Signal::derive(move || errors.get().dates)/>

                <p class="thanqa-modal-content-description">"Description"</p>
                <textarea
                    class="thanqa-modal-content"
                    placeholder="Enter test plan description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>

                <p class="thanqa-modal-author-description">"Author"</p>
                <AuthorsList selected=author/>

                <label class="thanqa-modal-checkbox">
                    <input
                        class="thanqa-checkbox"
                        type="checkbox"
                        prop:checked=move || is_current.get()
                        on:change=move |_| is_current.update(|v| *v = !*v)
                    />
                    <span class="thanqa-modal-checkbox-text">"Choose this test-plan as current"</span>
                </label>

                <button class="thanqa-test-plan-button" type="submit" disabled=move || busy.get()>
                    "Create"
                </button>
            </form>
        </div>
    }
}

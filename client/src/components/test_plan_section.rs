//! "Current Test Plan" dashboard panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount (and after a plan is created) this panel issues two sequential
//! fetches: the current plan, then, only if one exists, the full plan list.
//! Nothing guards against unmount or overlapping refetches. A 403 from either
//! call ends the session; any other failure shows the generic error banner.

#[cfg(test)]
#[path = "test_plan_section_test.rs"]
mod test_plan_section_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::create_test_plan_modal::CreateTestPlanModal;
use crate::components::section_title::SectionTitle;
use crate::net::api::{ApiError, SERVER_ERROR_MESSAGE};
use crate::net::types::TestPlan;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;
use crate::state::test_plan::TestPlanState;
use crate::util::auth::expire_session;
use crate::util::dates::format_plan_period;
use crate::util::notify::show_error;

/// `"1 test plan"`, `"3 test plans"`.
pub fn plan_count_label(count: usize) -> String {
    if count == 1 {
        "1 test plan".to_owned()
    } else {
        format!("{count} test plans")
    }
}

/// How a plan load ended, before it is applied to the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanLoadOutcome {
    Loaded { current: Option<TestPlan>, plans: Vec<TestPlan> },
    /// The server answered 403; the session is over.
    Expire,
    /// Any other failure; show the generic banner.
    Banner,
}

/// Run the current-plan fetch and, only when it yields a plan, the
/// all-plans fetch.
pub async fn resolve_plans<C, CF, A, AF>(fetch_current: C, fetch_all: A) -> PlanLoadOutcome
where
    C: FnOnce() -> CF,
    CF: Future<Output = Result<Option<TestPlan>, ApiError>>,
    A: FnOnce() -> AF,
    AF: Future<Output = Result<Vec<TestPlan>, ApiError>>,
{
    let result = async {
        let current = fetch_current().await?;
        let plans = if current.is_some() { fetch_all().await? } else { Vec::new() };
        Ok::<_, ApiError>((current, plans))
    }
    .await;

    match result {
        Ok((current, plans)) => PlanLoadOutcome::Loaded { current, plans },
        Err(e) if e.is_forbidden() => PlanLoadOutcome::Expire,
        Err(e) => {
            leptos::logging::warn!("test plan fetch failed: {e}");
            PlanLoadOutcome::Banner
        }
    }
}

/// Write a load outcome into the panel, ending the session or raising the
/// error banner as needed. Always clears `loading`.
pub fn apply_plan_outcome<F>(
    outcome: PlanLoadOutcome,
    state: RwSignal<TestPlanState>,
    auth: RwSignal<AuthState>,
    notifications: RwSignal<NotificationState>,
    navigate: &F,
) where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        PlanLoadOutcome::Loaded { current, plans } => state.update(|s| {
            s.plans = plans;
            s.set_current(current);
            s.loading = false;
        }),
        PlanLoadOutcome::Expire => {
            state.update(|s| s.loading = false);
            expire_session(auth, navigate);
        }
        PlanLoadOutcome::Banner => {
            state.update(|s| s.loading = false);
            show_error(notifications, SERVER_ERROR_MESSAGE);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn load_plans<F>(
    token: String,
    state: RwSignal<TestPlanState>,
    auth: RwSignal<AuthState>,
    notifications: RwSignal<NotificationState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions),
{
    use crate::net::api;

    let outcome =
        resolve_plans(|| api::fetch_current_test_plan(&token), || api::fetch_all_test_plans(&token)).await;
    apply_plan_outcome(outcome, state, auth, notifications, &navigate);
}

#[component]
pub fn TestPlanSection() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();
    let state = RwSignal::new(TestPlanState::default());
    let refresh = Memo::new(move |_| state.with(|s| s.refresh_seq));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        refresh.track();
        let Some(token) = auth.get_untracked().token() else {
            state.update(|s| s.loading = false);
            return;
        };
        state.update(|s| s.loading = true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(load_plans(token, state, auth, notifications, navigate));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, notifications, navigate, refresh);
    }

    let button_hovered = RwSignal::new(false);
    let on_close = Callback::new(move |()| state.update(TestPlanState::close_modal));
    let on_created = Callback::new(move |()| state.update(TestPlanState::plan_created));

    let current_title = move || state.with(|s| s.current.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let current_period = move || {
        state.with(|s| {
            s.current
                .as_ref()
                .map(|p| format_plan_period(p.start_date.as_deref(), p.end_date.as_deref()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="thanqa-current-test-plan">
            <SectionTitle title="Current Test Plan"/>
            <div class="thanqa-current-test-plan-short-info">
                <Show
                    when=move || state.with(|s| s.current.is_some())
                    fallback=move || {
                        view! {
                            <Show when=move || !state.with(|s| s.loading)>
                                <button
                                    id="testPlanButton"
                                    class="thanqa-test-plan-button-no-current-test-plan"
                                    class:thanqa-test-plan-button--hover=move || button_hovered.get()
                                    type="button"
                                    on:mousemove=move |_| button_hovered.set(true)
                                    on:mouseleave=move |_| button_hovered.set(false)
                                    on:click=move |_| state.update(TestPlanState::open_modal)
                                >
                                    "Create test plan"
                                </button>
                            </Show>
                        }
                    }
                >
                    <div class="thanqa-current-test-plan-details">
                        <p class="thanqa-current-test-plan-title">{current_title}</p>
                        <p class="thanqa-current-test-plan-period">{current_period}</p>
                        <p class="thanqa-current-test-plan-count">
                            {move || plan_count_label(state.with(TestPlanState::plan_count))}
                        </p>
                    </div>
                </Show>
                <div class="thanqa-test-plan-icon"></div>
            </div>
            <Show when=move || state.with(|s| s.modal_open)>
                <CreateTestPlanModal on_close=on_close on_created=on_created/>
            </Show>
        </div>
    }
}

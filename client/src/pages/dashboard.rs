//! Dashboard page: sidebar, test runs, run counters and the current test plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Every panel fetches its own data; nothing
//! is shared between them beyond the auth record.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::Sidebar;
use crate::components::test_cases_table::TestCasesTable;
use crate::components::test_plan_section::TestPlanSection;
use crate::components::test_run_counter_table::TestRunCounterTable;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="main">
                <Sidebar/>
                <div class="main__content">
                    <TestCasesTable/>
                    <TestRunCounterTable/>
                    <TestPlanSection/>
                </div>
            </div>
        </ProtectedRoute>
    }
}

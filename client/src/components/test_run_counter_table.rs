//! Test-run status counters.

#[cfg(test)]
#[path = "test_run_counter_table_test.rs"]
mod test_run_counter_table_test;

use leptos::prelude::*;

/// Number of test runs per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestRunCounts {
    pub completed: u32,
    pub in_progress: u32,
    pub blocked: u32,
    pub failed: u32,
}

impl TestRunCounts {
    /// `(counter class, count, label)` in display order.
    pub fn rows(self) -> [(&'static str, u32, &'static str); 4] {
        [
            ("passed-thanqa-test-runs-counter", self.completed, "Test Runs Completed"),
            ("in-progress-thanqa-test-runs-counter", self.in_progress, "Test Runs In Progress"),
            ("blocked-thanqa-test-runs-counter", self.blocked, "Test Runs Blocked"),
            ("failed-thanqa-test-runs-counter", self.failed, "Test Runs Failed"),
        ]
    }

    pub fn total(self) -> u32 {
        self.completed + self.in_progress + self.blocked + self.failed
    }
}

#[component]
pub fn TestRunCounterTable(#[prop(optional)] counts: TestRunCounts) -> impl IntoView {
    view! {
        <div class="thanqa-test-runs-counter-table">
            {counts
                .rows()
                .into_iter()
                .map(|(class, count, label)| {
                    view! {
                        <div class="thanqa-test-runs-form">
                            <p class=class>{count}</p>
                            <p class="thanqa-test-runs-counter-text">{label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

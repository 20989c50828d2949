//! "Current test plan" panel state.
//!
//! DESIGN
//! ======
//! Owned by the dashboard's `TestPlanSection`; nothing else reads it, so it
//! is a local signal rather than an app-wide context.

#[cfg(test)]
#[path = "test_plan_test.rs"]
mod test_plan_test;

use crate::net::types::TestPlan;

#[derive(Clone, Debug)]
pub struct TestPlanState {
    pub current: Option<TestPlan>,
    pub plans: Vec<TestPlan>,
    pub loading: bool,
    pub modal_open: bool,
    /// Bumped to request a refetch (e.g. after creating a plan).
    pub refresh_seq: u64,
}

/// Starts in `loading` so the "Create test plan" button stays hidden until
/// the first current-plan fetch settles.
impl Default for TestPlanState {
    fn default() -> Self {
        Self { current: None, plans: Vec::new(), loading: true, modal_open: false, refresh_seq: 0 }
    }
}

impl TestPlanState {
    /// Record the result of the current-plan fetch. Clearing `current` also
    /// clears the list, since the list is only fetched when a plan exists.
    pub fn set_current(&mut self, current: Option<TestPlan>) {
        if current.is_none() {
            self.plans.clear();
        }
        self.current = current;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Close the modal and ask the section to refetch.
    pub fn plan_created(&mut self) {
        self.modal_open = false;
        self.refresh_seq += 1;
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }
}

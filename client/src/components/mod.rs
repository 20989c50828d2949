//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the login form and dashboard panels while reading and
//! writing shared state from Leptos context providers.

pub mod authors_list;
pub mod create_test_plan_modal;
pub mod field_error;
pub mod login_form;
pub mod notification_host;
pub mod protected_route;
pub mod section_title;
pub mod sidebar;
pub mod test_cases_table;
pub mod test_plan_section;
pub mod test_run_counter_table;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notifications`, `test_plan`) so
//! individual components can depend on small focused models provided via
//! Leptos context.

pub mod auth;
pub mod notifications;
pub mod test_plan;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! navigation side effects) and pure form logic from page and component code
//! to improve reuse and testability.

pub mod auth;
pub mod auth_storage;
pub mod dates;
pub mod notify;
pub mod storage;
pub mod validation;

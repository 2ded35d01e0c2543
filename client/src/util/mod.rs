//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod error_report;
pub mod horizontal_resize;
pub mod listener_scope;
pub mod perf;
pub mod sidebar_layout;
pub mod ui_persistence;

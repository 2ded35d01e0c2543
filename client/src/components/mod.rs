//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome. The sidebar takes its inputs as
//! props; the panels it hosts read shared state from Leptos context providers.

pub mod explorer_panel;
pub mod onboarding_status_bar;
pub mod panel_stack;
pub mod sidebar;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`explorer`, `onboarding`, `sidebar`, etc.) so the
//! sidebar can take exactly the inputs it needs as explicit props.

pub mod config;
pub mod explorer;
pub mod onboarding;
pub mod panel_stack;
pub mod sidebar;

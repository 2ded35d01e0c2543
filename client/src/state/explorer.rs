//! Explorer chrome state shared by the editor page and explorer panel.

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

use serde::{Deserialize, Serialize};

/// Local storage key for the persisted pin preference.
pub const PINNED_STORAGE_KEY: &str = "explorer_sidebar_pinned";

/// Explorer sidebar state provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorerState {
    pub pinned: bool,
    pub width: f64,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self { pinned: true, width: crate::state::config::DEFAULT_WIDTH_PX }
    }
}

impl ExplorerState {
    /// Flip the pin flag and return the new value.
    pub fn toggle_pinned(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    /// Label for the pin toggle button.
    pub fn pin_label(&self) -> &'static str {
        if self.pinned { "Unpin" } else { "Pin" }
    }
}

//! Reveal state for the unpinned explorer sidebar.
//!
//! DESIGN
//! ======
//! `active` only matters while the sidebar is unpinned. Transitions take the
//! pinned/resizing inputs explicitly so the component never has to consult a
//! global store, and tests can drive every branch without a DOM.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Locally owned reveal flag for the sidebar overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub active: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { active: true }
    }
}

impl SidebarState {
    /// Pointer moved to horizontal coordinate `x` anywhere in the document.
    ///
    /// Reveals a hidden, unpinned sidebar when the pointer reaches the left
    /// edge. Returns `true` when `active` changed.
    pub fn pointer_moved(&mut self, x: f64, pinned: bool, reveal_threshold_px: f64) -> bool {
        if pinned || self.active {
            return false;
        }
        if x <= reveal_threshold_px {
            self.active = true;
            return true;
        }
        false
    }

    /// Pointer left the sidebar container.
    ///
    /// Hides an unpinned sidebar unless a resize drag is in flight. Returns
    /// `true` when `active` changed.
    pub fn pointer_left(&mut self, pinned: bool, resizing: bool) -> bool {
        if pinned || resizing {
            return false;
        }
        let changed = self.active;
        self.active = false;
        changed
    }
}

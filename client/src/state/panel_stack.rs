//! Navigable stack of sidebar sub-panels.
//!
//! DESIGN
//! ======
//! The stack is never empty: the initial panel is the root and cannot be
//! popped, so the sidebar always has something to render.

#[cfg(test)]
#[path = "panel_stack_test.rs"]
mod panel_stack_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelStackState<P> {
    root: P,
    pushed: Vec<P>,
}

impl<P> PanelStackState<P> {
    pub fn new(initial: P) -> Self {
        Self { root: initial, pushed: Vec::new() }
    }

    /// Open `panel` on top of the current one.
    pub fn push(&mut self, panel: P) {
        self.pushed.push(panel);
    }

    /// Close the top panel. The root panel is never removed.
    pub fn pop(&mut self) -> Option<P> {
        self.pushed.pop()
    }

    pub fn current(&self) -> &P {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Number of panels in the stack, root included.
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    pub fn can_pop(&self) -> bool {
        !self.pushed.is_empty()
    }
}

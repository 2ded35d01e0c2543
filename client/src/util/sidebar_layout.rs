//! Pure mapping from sidebar state to container/handle presentation.

#[cfg(test)]
#[path = "sidebar_layout_test.rs"]
mod sidebar_layout_test;

const CONTAINER_BASE_STYLE: &str = "display: flex; height: 100%; z-index: 3; transition: transform 150ms;";
const HANDLE_BASE_STYLE: &str =
    "position: relative; flex: none; width: 8px; margin-right: -4px; height: 100%; z-index: 4; cursor: ew-resize;";
const HANDLE_BAR_BASE_STYLE: &str = "width: 4px; height: 100%; transition: background 150ms;";
pub const HANDLE_ACTIVE_COLOR: &str = "#3b82f6";

/// How the sidebar container participates in page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarPosition {
    /// In normal flow, pushing editor content aside.
    Relative,
    /// Overlay on top of the editor.
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarLayout {
    pub position: SidebarPosition,
    /// Container translated by -100% on the x axis.
    pub offscreen: bool,
    pub handle_left_px: f64,
    pub handle_highlighted: bool,
}

pub fn sidebar_layout(pinned: bool, active: bool, resizing: bool, width: f64) -> SidebarLayout {
    let hidden = !pinned && !active;
    SidebarLayout {
        position: if pinned { SidebarPosition::Relative } else { SidebarPosition::Fixed },
        offscreen: hidden,
        handle_left_px: if hidden { 0.0 } else { width },
        handle_highlighted: resizing,
    }
}

impl SidebarLayout {
    pub fn container_class(&self) -> String {
        let mut class = String::from("explorer-sidebar");
        match self.position {
            SidebarPosition::Relative => class.push_str(" explorer-sidebar--pinned"),
            SidebarPosition::Fixed => class.push_str(" explorer-sidebar--overlay"),
        }
        if self.offscreen {
            class.push_str(" explorer-sidebar--offscreen");
        }
        class
    }

    pub fn container_style(&self) -> String {
        let placement = match (self.position, self.offscreen) {
            (SidebarPosition::Relative, _) => "position: relative;",
            (SidebarPosition::Fixed, false) => "position: fixed; top: 0; left: 0;",
            (SidebarPosition::Fixed, true) => "position: fixed; top: 0; left: 0; transform: translateX(-100%);",
        };
        format!("{placement} {CONTAINER_BASE_STYLE}")
    }

    /// The handle sits in the container's flex row, right after the panel.
    pub fn handle_style(&self) -> String {
        format!("left: {:.0}px; {HANDLE_BASE_STYLE}", self.handle_left_px)
    }

    pub fn handle_bar_style(&self) -> String {
        let background = if self.handle_highlighted { HANDLE_ACTIVE_COLOR } else { "transparent" };
        format!("{HANDLE_BAR_BASE_STYLE} background: {background};")
    }

    pub fn handle_bar_class(&self) -> &'static str {
        if self.handle_highlighted {
            "explorer-sidebar__handle-bar explorer-sidebar__handle-bar--active"
        } else {
            "explorer-sidebar__handle-bar"
        }
    }
}

/// Inline style for the scrollable panel body.
pub fn panel_style(width: f64, min_width: f64, max_width: f64) -> String {
    format!("width: {width:.0}px; min-width: {min_width:.0}px; max-width: {max_width:.0}px; height: 100%; overflow-y: auto;")
}

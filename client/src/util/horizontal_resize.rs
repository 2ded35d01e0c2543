//! Drag-to-resize support for horizontally resizable panels.
//!
//! ARCHITECTURE
//! ============
//! `ResizeGesture` is the pure drag model: it remembers where the resized
//! node starts and turns pointer positions into clamped widths.
//! `use_horizontal_resize` binds that model to the DOM. While a drag is in
//! flight it listens on the document for move/end events, so the gesture keeps
//! tracking when the pointer leaves the handle.

#[cfg(test)]
#[path = "horizontal_resize_test.rs"]
mod horizontal_resize_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthBounds {
    pub min: f64,
    pub max: f64,
}

impl WidthBounds {
    pub fn clamp(self, width: f64) -> f64 {
        width.clamp(self.min, self.max)
    }
}

/// One resize drag, from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeGesture {
    anchor: Option<Anchor>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchor {
    pointer_x: f64,
    width: f64,
}

impl ResizeGesture {
    /// Start a drag at `pointer_x` on a node currently `width` wide.
    pub fn begin(&mut self, pointer_x: f64, width: f64) {
        self.anchor = Some(Anchor { pointer_x, width });
    }

    /// Width the node should take with the pointer at `pointer_x`, or `None`
    /// when no drag is in progress. Grabbing without moving keeps the width.
    pub fn drag(&self, pointer_x: f64, bounds: WidthBounds) -> Option<f64> {
        let anchor = self.anchor?;
        Some(bounds.clamp(anchor.width + pointer_x - anchor.pointer_x))
    }

    /// Finish the drag. Returns `true` if one was in progress.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Reactive handle returned by [`use_horizontal_resize`].
#[derive(Clone, Copy)]
pub struct Resizer {
    gesture: RwSignal<ResizeGesture>,
    node_ref: NodeRef<leptos::html::Div>,
    on_width_change: Callback<f64>,
    bounds: WidthBounds,
}

impl Resizer {
    /// Tracked read of the resizing flag.
    pub fn resizing(&self) -> bool {
        self.gesture.with(ResizeGesture::is_resizing)
    }

    pub fn resizing_untracked(&self) -> bool {
        self.gesture.with_untracked(ResizeGesture::is_resizing)
    }

    pub fn on_mouse_down(&self, ev: leptos::ev::MouseEvent) {
        ev.prevent_default();
        self.begin(f64::from(ev.client_x()));
    }

    pub fn on_touch_start(&self, ev: leptos::ev::TouchEvent) {
        if let Some(x) = first_touch_x(&ev) {
            self.begin(x);
        }
    }

    pub fn on_touch_end(&self, _ev: leptos::ev::TouchEvent) {
        self.end();
    }

    fn begin(&self, pointer_x: f64) {
        let width = self.node_width();
        self.gesture.update(|g| g.begin(pointer_x, width));
    }

    fn drag_to(&self, pointer_x: f64) {
        let bounds = self.bounds;
        if let Some(width) = self.gesture.with_untracked(|g| g.drag(pointer_x, bounds)) {
            self.on_width_change.run(width);
        }
    }

    fn end(&self) {
        if self.resizing_untracked() {
            self.gesture.update(|g| {
                g.end();
            });
        }
    }

    fn node_width(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            self.node_ref
                .get_untracked()
                .map_or(self.bounds.min, |node| node.get_bounding_client_rect().width())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.node_ref;
            self.bounds.min
        }
    }
}

fn first_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        ev.touches().get(0).map(|touch| f64::from(touch.client_x()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Track resize drags for `node_ref`, reporting new widths through
/// `on_width_change`.
pub fn use_horizontal_resize(
    node_ref: NodeRef<leptos::html::Div>,
    on_width_change: Callback<f64>,
    bounds: WidthBounds,
) -> Resizer {
    let resizer = Resizer { gesture: RwSignal::new(ResizeGesture::default()), node_ref, on_width_change, bounds };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::listener_scope::{DocumentListener, ListenerGroup, bind_to_owner};

        let drag_listeners = ListenerGroup::new([
            DocumentListener::new("mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                    resizer.drag_to(f64::from(ev.client_x()));
                }
            }),
            DocumentListener::new("touchmove", move |ev| {
                if let Some(x) = ev.dyn_ref::<web_sys::TouchEvent>().and_then(first_touch_x) {
                    resizer.drag_to(x);
                }
            }),
            DocumentListener::new("mouseup", move |_| resizer.end()),
            DocumentListener::new("touchend", move |_| resizer.end()),
        ]);
        bind_to_owner(drag_listeners, move || resizer.resizing().then_some(()));
    }

    resizer
}

//! Collapsible, resizable explorer sidebar.
//!
//! ARCHITECTURE
//! ============
//! The sidebar is either pinned (in layout flow, always visible) or an
//! overlay that slides off-screen when the pointer leaves it and slides back
//! when the pointer touches the left edge of the page. Pinned state and
//! onboarding flags are injected as props; the reveal flag is local.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pointer tracking uses a document-level `mousemove`/`touchmove` listener held
//! in a `ListenerGroup`, re-registered whenever `{active, pinned}` changes and
//! removed when the component unmounts. Width changes flow upward through
//! `on_width_change` while the drag handle is in use.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::error::Errors;
use leptos::prelude::*;

use crate::components::explorer_panel::explorer_panel;
use crate::components::onboarding_status_bar::OnboardingStatusBar;
use crate::components::panel_stack::PanelStack;
use crate::state::config::SidebarConfig;
use crate::state::onboarding::OnboardingFlags;
use crate::state::sidebar::SidebarState;
use crate::util::error_report;
use crate::util::horizontal_resize::{WidthBounds, use_horizontal_resize};
use crate::util::perf::{self, PerformanceTransaction};
use crate::util::sidebar_layout::{panel_style, sidebar_layout};

/// Explorer sidebar with hover-to-reveal and a resize handle.
#[component]
pub fn Sidebar(
    #[prop(into)] width: Signal<f64>,
    on_width_change: Callback<f64>,
    #[prop(into)] pinned: Signal<bool>,
    #[prop(into)] onboarding: Signal<OnboardingFlags>,
    #[prop(optional)] config: SidebarConfig,
) -> impl IntoView {
    let sidebar_ref = NodeRef::<leptos::html::Div>::new();
    let state = RwSignal::new(SidebarState::default());
    let bounds = WidthBounds { min: config.min_width_px, max: config.max_width_px };
    let resizer = use_horizontal_resize(sidebar_ref, on_width_change, bounds);

    perf::start_tracking(PerformanceTransaction::SideBarMount);
    Effect::new(perf::stop_tracking);

    let threshold = config.reveal_threshold_px;
    let on_pointer_x = move |x: f64| {
        let mut next = state.get_untracked();
        if next.pointer_moved(x, pinned.get_untracked(), threshold) {
            state.set(next);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::listener_scope::{DocumentListener, ListenerGroup, bind_to_owner};

        let listener_deps = Memo::new(move |_| (state.with(|s| s.active), pinned.get()));
        let pointer_listeners = ListenerGroup::new([
            DocumentListener::new("mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                    on_pointer_x(f64::from(ev.client_x()));
                }
            }),
            DocumentListener::new("touchmove", move |ev| {
                let touch = ev.dyn_ref::<web_sys::TouchEvent>().and_then(|ev| ev.touches().get(0));
                if let Some(touch) = touch {
                    on_pointer_x(f64::from(touch.client_x()));
                }
            }),
        ]);
        bind_to_owner(pointer_listeners, move || Some(listener_deps.get()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_pointer_x;
    }

    let on_mouse_leave = move |_: leptos::ev::MouseEvent| {
        let mut next = state.get_untracked();
        if next.pointer_left(pinned.get_untracked(), resizer.resizing_untracked()) {
            state.set(next);
        }
    };

    Effect::new(move || {
        let active = state.with(|s| s.active);
        leptos::logging::log!("sidebar: pinned={} active={active}", pinned.get());
    });

    let layout = Memo::new(move |_| sidebar_layout(pinned.get(), state.with(|s| s.active), resizer.resizing(), width.get()));
    let body_style = move || panel_style(width.get(), config.min_width_px, config.max_width_px);

    view! {
        <div
            class=move || layout.get().container_class()
            style=move || layout.get().container_style()
            on:mouseleave=on_mouse_leave
        >
            <div class="explorer-sidebar__panel t--sidebar" node_ref=sidebar_ref style=body_style>
                <Show when=move || onboarding.get().shows_status_bar()>
                    <OnboardingStatusBar/>
                </Show>
                <PanelStack class="explorer-sidebar__stack" initial=explorer_panel(config) show_header=false/>
            </div>
            <div
                class="explorer-sidebar__handle"
                style=move || layout.get().handle_style()
                on:mousedown=move |ev| resizer.on_mouse_down(ev)
                on:touchstart=move |ev| resizer.on_touch_start(ev)
                on:touchend=move |ev| resizer.on_touch_end(ev)
            >
                <div class=move || layout.get().handle_bar_class() style=move || layout.get().handle_bar_style()></div>
            </div>
        </div>
    }
}

/// `Sidebar` behind an error boundary that reports render failures.
///
/// The config is validated here; an invalid one is surfaced as a render
/// error rather than silently corrected.
#[component]
pub fn MonitoredSidebar(
    #[prop(into)] width: Signal<f64>,
    on_width_change: Callback<f64>,
    #[prop(into)] pinned: Signal<bool>,
    #[prop(into)] onboarding: Signal<OnboardingFlags>,
    #[prop(optional)] config: SidebarConfig,
) -> impl IntoView {
    let fallback = |errors: ArcRwSignal<Errors>| {
        for (_, err) in errors.get_untracked() {
            error_report::report("EntityExplorerSidebar", &err);
        }
        view! { <div class="explorer-sidebar explorer-sidebar--failed">"Explorer unavailable"</div> }
    };

    view! {
        <ErrorBoundary fallback=fallback>
            {move || {
                config
                    .validate()
                    .map(|()| {
                        view! {
                            <Sidebar
                                width=width
                                on_width_change=on_width_change
                                pinned=pinned
                                onboarding=onboarding
                                config=config
                            />
                        }
                    })
            }}
        </ErrorBoundary>
    }
}

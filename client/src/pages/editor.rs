//! Editor page: sidebar plus the editing surface it sits beside.
//!
//! ARCHITECTURE
//! ============
//! The page is the only place that reads the shared explorer/onboarding
//! contexts on the sidebar's behalf. It turns them into plain signals and a
//! width callback, so the sidebar itself never touches the stores.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use crate::components::sidebar::MonitoredSidebar;
use crate::state::config::SidebarConfig;
use crate::state::explorer::ExplorerState;
use crate::state::onboarding::OnboardingState;
use crate::util::ui_persistence::{load_pinned, load_sidebar_config, save_pinned};

/// Apply preferences read from storage on top of the default store.
fn restore_preferences(explorer: &mut ExplorerState, stored_pinned: Option<bool>, config: &SidebarConfig) {
    if let Some(pinned) = stored_pinned {
        explorer.pinned = pinned;
    }
    explorer.width = config.default_width_px;
}

/// Width update applied when the sidebar reports a resize.
fn apply_width(explorer: &mut ExplorerState, width: f64, config: &SidebarConfig) {
    explorer.width = config.clamp_width(width);
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let config = RwSignal::new(SidebarConfig::default());

    // Effects run only in the browser after hydration; the first paint keeps
    // the server's default markup.
    Effect::new(move || {
        let stored = load_sidebar_config();
        explorer.update(|e| restore_preferences(e, load_pinned(), &stored));
        if stored != config.get_untracked() {
            config.set(stored);
        }
    });

    // Persist pin changes, skipping the initial run so a stored preference is
    // never overwritten by the default.
    Effect::new(move |prev: Option<bool>| {
        let pinned = explorer.with(|e| e.pinned);
        if prev.is_some_and(|prev| prev != pinned) {
            save_pinned(pinned);
        }
        pinned
    });

    let width = Signal::derive(move || explorer.with(|e| e.width));
    let pinned = Signal::derive(move || explorer.with(|e| e.pinned));
    let flags = Signal::derive(move || onboarding.with(OnboardingState::flags));
    let on_width_change =
        Callback::new(move |next: f64| explorer.update(|e| apply_width(e, next, &config.get_untracked())));

    view! {
        <div class="editor" class:editor--sidebar-pinned=move || pinned.get()>
            {move || {
                view! {
                    <MonitoredSidebar
                        width=width
                        on_width_change=on_width_change
                        pinned=pinned
                        onboarding=flags
                        config=config.get()
                    />
                }
            }}
            <main class="editor__canvas">
                <p class="editor__hint">
                    {move || {
                        if pinned.get() {
                            "Explorer pinned"
                        } else {
                            "Move the pointer to the left edge to reveal the explorer"
                        }
                    }}
                </p>
            </main>
        </div>
    }
}

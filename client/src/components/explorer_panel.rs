//! Root explorer panel and its nested settings panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The explorer owns the pin toggle. It writes `ExplorerState` through
//! context; the editor page feeds the resulting pinned flag back into the
//! sidebar as an explicit prop.

use leptos::prelude::*;

use crate::components::panel_stack::{Panel, PanelStackHandle};
use crate::state::config::SidebarConfig;
use crate::state::explorer::ExplorerState;

const ENTITY_GROUPS: [&str; 4] = ["Pages", "Widgets", "Queries", "Data Sources"];

/// Panel descriptor used as the sidebar stack's initial panel.
pub fn explorer_panel(config: SidebarConfig) -> Panel {
    Panel::new("Explorer", move || view! { <ExplorerPanel config=config/> })
}

#[component]
pub fn ExplorerPanel(config: SidebarConfig) -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();
    let stack = expect_context::<PanelStackHandle>();

    let toggle_pin = move |_| {
        explorer.update(|e| {
            e.toggle_pinned();
        });
    };
    let open_settings = move |_| {
        stack.open(Panel::new("Settings", move || view! { <SettingsPanel config=config/> }));
    };

    view! {
        <div class="explorer-panel">
            <div class="explorer-panel__header">
                <span class="explorer-panel__title">"Explorer"</span>
                <button class="explorer-panel__pin t--pin-explorer" on:click=toggle_pin>
                    {move || explorer.with(ExplorerState::pin_label)}
                </button>
                <button class="explorer-panel__settings" on:click=open_settings title="Sidebar settings">
                    "⚙"
                </button>
            </div>
            <ul class="explorer-panel__groups">
                {ENTITY_GROUPS
                    .iter()
                    .map(|group| view! { <li class="explorer-panel__group">{*group}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Read-only view of the active sidebar configuration.
#[component]
pub fn SettingsPanel(config: SidebarConfig) -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();
    let stack = expect_context::<PanelStackHandle>();

    view! {
        <div class="explorer-settings">
            <div class="explorer-settings__header">
                <button class="explorer-settings__back" on:click=move |_| stack.close()>"‹ Back"</button>
                <span class="explorer-settings__title">"Sidebar settings"</span>
            </div>
            <dl class="explorer-settings__values">
                <dt>"Width"</dt>
                <dd>{move || format!("{:.0}px", explorer.with(|e| e.width))}</dd>
                <dt>"Width range"</dt>
                <dd>{format!("{:.0}px – {:.0}px", config.min_width_px, config.max_width_px)}</dd>
                <dt>"Reveal edge"</dt>
                <dd>{format!("{:.0}px", config.reveal_threshold_px)}</dd>
            </dl>
        </div>
    }
}

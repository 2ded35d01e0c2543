//! Navigable stack of sidebar sub-panels.
//!
//! ARCHITECTURE
//! ============
//! The stack state lives in a signal owned by the `PanelStack` instance and
//! is exposed to descendant panels through a `PanelStackHandle` context, so a
//! panel can open a nested panel or close itself without knowing its host.

use leptos::prelude::*;

use crate::state::panel_stack::PanelStackState;

/// A panel the stack can render.
#[derive(Clone)]
pub struct Panel {
    pub title: &'static str,
    pub view: ViewFn,
}

impl Panel {
    pub fn new(title: &'static str, view: impl Into<ViewFn>) -> Self {
        Self { title, view: view.into() }
    }
}

/// Context handle for panels rendered inside a `PanelStack`.
#[derive(Clone, Copy)]
pub struct PanelStackHandle(RwSignal<PanelStackState<Panel>>);

impl PanelStackHandle {
    pub fn open(&self, panel: Panel) {
        self.0.update(|stack| stack.push(panel));
    }

    pub fn close(&self) {
        self.0.update(|stack| {
            stack.pop();
        });
    }

    pub fn can_close(&self) -> bool {
        self.0.with(PanelStackState::can_pop)
    }
}

/// Renders the top panel of a stack seeded with `initial`.
#[component]
pub fn PanelStack(
    initial: Panel,
    #[prop(default = true)] show_header: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let stack = RwSignal::new(PanelStackState::new(initial));
    let handle = PanelStackHandle(stack);
    provide_context(handle);

    let title = move || stack.with(|s| s.current().title);
    let body = move || stack.with(|s| s.current().view.clone()).run();

    view! {
        <div class=format!("panel-stack {class}")>
            <Show when=move || show_header>
                <div class="panel-stack__header">
                    <Show when=move || handle.can_close()>
                        <button class="panel-stack__back" on:click=move |_| handle.close() title="Back">
                            "‹"
                        </button>
                    </Show>
                    <span class="panel-stack__title">{title}</span>
                </div>
            </Show>
            <div class="panel-stack__body">{body}</div>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::editor::EditorPage;
use crate::state::explorer::ExplorerState;
use crate::state::onboarding::OnboardingState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the explorer and onboarding stores and sets up client-side
/// routing. Stores start from defaults so server and client render the same
/// markup; stored preferences are applied by the editor page once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let explorer = RwSignal::new(ExplorerState::default());
    let onboarding = RwSignal::new(OnboardingState { enabled: true, ..OnboardingState::default() });

    provide_context(explorer);
    provide_context(onboarding);

    view! {
        <Title text="Editor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EditorPage/>
            </Routes>
        </Router>
    }
}

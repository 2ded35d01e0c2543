//! First-time onboarding progress strip pinned above the explorer.

use leptos::prelude::*;

use crate::state::onboarding::OnboardingState;

#[component]
pub fn OnboardingStatusBar() -> impl IntoView {
    let onboarding = expect_context::<RwSignal<OnboardingState>>();

    let label = move || onboarding.with(OnboardingState::progress_label);
    let complete = move || onboarding.with(|o| o.complete);
    let progress_style = move || {
        onboarding.with(|o| {
            let pct = if o.steps_total == 0 { 100.0 } else { f64::from(o.steps_done) / f64::from(o.steps_total) * 100.0 };
            format!("width: {pct:.0}%;")
        })
    };

    view! {
        <div class="onboarding-status t--onboarding-statusbar" class:onboarding-status--complete=complete>
            <span class="onboarding-status__label">{label}</span>
            <div class="onboarding-status__track">
                <div class="onboarding-status__fill" style=progress_style></div>
            </div>
            <Show when=move || !complete()>
                <button class="onboarding-status__next" on:click=move |_| onboarding.update(OnboardingState::advance)>
                    "Next"
                </button>
            </Show>
        </div>
    }
}

//! First-time user onboarding progress shown above the explorer.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

/// The two flags the sidebar needs to decide whether to show the status bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingFlags {
    pub enabled: bool,
    pub complete: bool,
}

impl OnboardingFlags {
    /// The status bar stays visible once onboarding finishes so the
    /// completion message can be seen.
    pub fn shows_status_bar(self) -> bool {
        self.enabled || self.complete
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingState {
    pub enabled: bool,
    pub complete: bool,
    pub steps_done: u32,
    pub steps_total: u32,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self { enabled: false, complete: false, steps_done: 0, steps_total: 5 }
    }
}

impl OnboardingState {
    pub fn flags(&self) -> OnboardingFlags {
        OnboardingFlags { enabled: self.enabled, complete: self.complete }
    }

    /// Status line rendered by the onboarding bar.
    pub fn progress_label(&self) -> String {
        if self.complete {
            return "Onboarding complete".to_owned();
        }
        let done = self.steps_done.min(self.steps_total);
        format!("{done} of {} steps", self.steps_total)
    }

    /// Mark one more step as done, completing onboarding on the last one.
    pub fn advance(&mut self) {
        if self.complete {
            return;
        }
        self.steps_done = (self.steps_done + 1).min(self.steps_total);
        if self.steps_done == self.steps_total {
            self.complete = true;
            self.enabled = false;
        }
    }
}

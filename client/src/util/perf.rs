//! Lightweight performance marks for UI transactions.
//!
//! A transaction is started before a component renders and stopped from its
//! first effect, so the measured span covers the initial mount. Durations are
//! logged; nothing is shipped off the page.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceTransaction {
    SideBarMount,
}

impl PerformanceTransaction {
    pub fn name(self) -> &'static str {
        match self {
            Self::SideBarMount => "SIDE_BAR_MOUNT",
        }
    }
}

/// Single in-flight transaction tracker.
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    pending: Option<(PerformanceTransaction, f64)>,
}

impl PerformanceTracker {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Start `transaction` at `now_ms`. A transaction that is already running
    /// keeps its original start time.
    pub fn start_at(&mut self, transaction: PerformanceTransaction, now_ms: f64) {
        if self.pending.is_none() {
            self.pending = Some((transaction, now_ms));
        }
    }

    /// Stop the running transaction, returning it with its elapsed time.
    pub fn stop_at(&mut self, now_ms: f64) -> Option<(PerformanceTransaction, f64)> {
        let (transaction, started_ms) = self.pending.take()?;
        Some((transaction, (now_ms - started_ms).max(0.0)))
    }

    pub fn is_tracking(&self) -> bool {
        self.pending.is_some()
    }
}

static TRACKER: Mutex<PerformanceTracker> = Mutex::new(PerformanceTracker::new());

pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Start `transaction` on the page-wide tracker.
pub fn start_tracking(transaction: PerformanceTransaction) {
    if let Ok(mut tracker) = TRACKER.lock() {
        tracker.start_at(transaction, now_ms());
    }
}

/// Stop the page-wide tracker and log the measured span.
pub fn stop_tracking() {
    let Ok(mut tracker) = TRACKER.lock() else {
        return;
    };
    if let Some((transaction, elapsed_ms)) = tracker.stop_at(now_ms()) {
        leptos::logging::log!("perf: {} took {elapsed_ms:.1}ms", transaction.name());
    }
}

//! Render error reporting for monitored components.
//!
//! Errors caught by the sidebar's error boundary land here. They are logged
//! to the console and counted so the page can surface how many reports were
//! filed in the current session. The count is per thread; in the browser that
//! is the whole page.

#[cfg(test)]
#[path = "error_report_test.rs"]
mod error_report_test;

use std::cell::Cell;

thread_local! {
    static REPORTED: Cell<usize> = const { Cell::new(0) };
}

/// Log a render failure for `component` and count it.
pub fn report(component: &str, error: &dyn std::fmt::Display) {
    REPORTED.with(|count| count.set(count.get() + 1));
    leptos::logging::error!("{component}: render failed: {error}");
}

/// Number of errors reported since page load.
pub fn reported_count() -> usize {
    REPORTED.with(Cell::get)
}

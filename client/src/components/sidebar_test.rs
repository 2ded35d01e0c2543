use super::*;
use crate::util::error_report::reported_count;

fn render_monitored(config: SidebarConfig) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! {
            <MonitoredSidebar
                width=Signal::stored(256.0)
                on_width_change=Callback::new(|_: f64| {})
                pinned=Signal::stored(true)
                onboarding=Signal::stored(OnboardingFlags::default())
                config=config
            />
        }
        .to_html()
    })
}

#[test]
fn inverted_width_range_renders_fallback_and_reports() {
    let config = SidebarConfig { min_width_px: 400.0, max_width_px: 200.0, ..SidebarConfig::default() };
    assert!(config.validate().is_err());

    let before = reported_count();
    let html = render_monitored(config);

    assert!(html.contains("Explorer unavailable"), "{html}");
    assert!(html.contains("explorer-sidebar--failed"), "{html}");
    assert!(reported_count() > before);
}

#[test]
fn negative_threshold_renders_fallback() {
    let config = SidebarConfig { reveal_threshold_px: -1.0, ..SidebarConfig::default() };
    let before = reported_count();
    let html = render_monitored(config);
    assert!(html.contains("Explorer unavailable"), "{html}");
    assert!(reported_count() > before);
}

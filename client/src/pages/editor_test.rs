use super::*;

#[test]
fn apply_width_stores_width_within_bounds() {
    let mut explorer = ExplorerState::default();
    apply_width(&mut explorer, 300.0, &SidebarConfig::default());
    assert_eq!(explorer.width, 300.0);
}

#[test]
fn apply_width_clamps_out_of_range_widths() {
    let config = SidebarConfig::default();
    let mut explorer = ExplorerState::default();
    apply_width(&mut explorer, 20.0, &config);
    assert_eq!(explorer.width, config.min_width_px);
    apply_width(&mut explorer, 2000.0, &config);
    assert_eq!(explorer.width, config.max_width_px);
}

#[test]
fn restore_applies_stored_unpin_over_default() {
    let mut explorer = ExplorerState::default();
    assert!(explorer.pinned);
    restore_preferences(&mut explorer, Some(false), &SidebarConfig::default());
    assert!(!explorer.pinned);
}

#[test]
fn restore_keeps_default_pin_when_nothing_stored() {
    let mut explorer = ExplorerState::default();
    restore_preferences(&mut explorer, None, &SidebarConfig::default());
    assert_eq!(explorer, ExplorerState::default());
}

#[test]
fn restore_takes_width_from_stored_config() {
    let config = SidebarConfig { default_width_px: 320.0, ..SidebarConfig::default() };
    let mut explorer = ExplorerState::default();
    restore_preferences(&mut explorer, Some(true), &config);
    assert_eq!(explorer.width, 320.0);
    assert!(explorer.pinned);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_starts_from_defaults_outside_browser() {
    // Server render: no storage, so the restore step is a no-op on defaults.
    let stored = load_sidebar_config();
    let mut explorer = ExplorerState::default();
    restore_preferences(&mut explorer, load_pinned(), &stored);
    assert_eq!(explorer, ExplorerState::default());
}

use super::*;

const BOUNDS: WidthBounds = WidthBounds { min: 192.0, max: 384.0 };

#[test]
fn idle_gesture_reports_no_width() {
    let gesture = ResizeGesture::default();
    assert!(!gesture.is_resizing());
    assert_eq!(gesture.drag(300.0, BOUNDS), None);
}

#[test]
fn grabbing_without_moving_keeps_width() {
    let mut gesture = ResizeGesture::default();
    // pointer lands a few pixels into the handle, right of the panel edge
    gesture.begin(262.0, 256.0);
    assert!(gesture.is_resizing());
    assert_eq!(gesture.drag(262.0, BOUNDS), Some(256.0));
}

#[test]
fn drag_adds_pointer_travel_to_start_width() {
    let mut gesture = ResizeGesture::default();
    gesture.begin(262.0, 256.0);
    assert_eq!(gesture.drag(302.0, BOUNDS), Some(296.0));
    assert_eq!(gesture.drag(242.0, BOUNDS), Some(236.0));
}

#[test]
fn drag_width_is_clamped_to_bounds() {
    let mut gesture = ResizeGesture::default();
    gesture.begin(256.0, 256.0);
    assert_eq!(gesture.drag(50.0, BOUNDS), Some(192.0));
    assert_eq!(gesture.drag(900.0, BOUNDS), Some(384.0));
}

#[test]
fn end_stops_gesture_once() {
    let mut gesture = ResizeGesture::default();
    gesture.begin(256.0, 256.0);
    assert!(gesture.end());
    assert!(!gesture.is_resizing());
    assert!(!gesture.end());
    assert_eq!(gesture.drag(250.0, BOUNDS), None);
}

#[test]
fn width_bounds_clamp_passes_values_in_range() {
    assert_eq!(BOUNDS.clamp(256.0), 256.0);
}

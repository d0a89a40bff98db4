// Pointer tracker rate limiting and the default-to-center behavior.

use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use strands_core::PointerTracker;

#[test]
fn starts_at_the_viewport_center() {
    let tracker = PointerTracker::new(Vec2::new(640.0, 360.0));
    assert_eq!(tracker.snapshot(), Vec2::new(640.0, 360.0));
}

#[test]
fn first_sample_is_always_accepted() {
    let mut tracker = PointerTracker::new(Vec2::ZERO);
    assert!(tracker.sample(10.0, 20.0, Instant::now()));
    assert_eq!(tracker.snapshot(), Vec2::new(10.0, 20.0));
}

#[test]
fn samples_inside_the_interval_are_discarded() {
    let mut tracker = PointerTracker::new(Vec2::ZERO);
    let t0 = Instant::now();
    assert!(tracker.sample(1.0, 1.0, t0));

    // 5ms later: inside ~16.7ms, dropped and position unchanged
    assert!(!tracker.sample(2.0, 2.0, t0 + Duration::from_millis(5)));
    assert_eq!(tracker.snapshot(), Vec2::new(1.0, 1.0));

    // 20ms later: past the interval, accepted
    assert!(tracker.sample(3.0, 3.0, t0 + Duration::from_millis(20)));
    assert_eq!(tracker.snapshot(), Vec2::new(3.0, 3.0));
}

#[test]
fn interval_is_measured_from_the_last_accepted_sample() {
    let mut tracker = PointerTracker::new(Vec2::ZERO);
    let t0 = Instant::now();
    assert!(tracker.sample(1.0, 1.0, t0));
    // A burst of dropped samples must not push the window forward
    assert!(!tracker.sample(2.0, 2.0, t0 + Duration::from_millis(10)));
    assert!(!tracker.sample(2.0, 2.0, t0 + Duration::from_millis(15)));
    assert!(tracker.sample(4.0, 4.0, t0 + Duration::from_millis(17)));
    assert_eq!(tracker.snapshot(), Vec2::new(4.0, 4.0));
}

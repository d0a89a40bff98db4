// Sanity checks on the fixed tuning constants and their relationships.

use strands_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn brightness_band_is_ordered() {
    assert!(BRIGHTNESS_MIN < BRIGHTNESS_MAX);
    assert!(BRIGHTNESS_RISE_STEP > 0.0);
    assert!(BRIGHTNESS_FALL_STEP > 0.0);
    // A single step never spans the whole band
    assert!(BRIGHTNESS_RISE_STEP < BRIGHTNESS_MAX - BRIGHTNESS_MIN);
    assert!(BRIGHTNESS_FALL_STEP < BRIGHTNESS_MAX - BRIGHTNESS_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_constants_are_positive() {
    assert!(MAX_STRANDS > 0);
    assert!(STRAND_DENSITY > 0.0);
    assert!(GLOW_RADIUS > 0.0);
    assert!(ORBIT_Y_RADIUS > 0.0);
    assert!(ANGULAR_VELOCITY > 0.0);
    assert!(DOT_RADIUS > 0.0);
    assert_eq!(DOT_COLORS.len(), 3);
}

#[test]
fn pointer_interval_is_roughly_one_display_frame() {
    let ms = POINTER_SAMPLE_INTERVAL.as_secs_f64() * 1000.0;
    assert!(ms > 16.0 && ms < 17.0, "got {ms}ms");
}

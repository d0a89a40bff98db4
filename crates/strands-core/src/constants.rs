// Strand population and animation tuning constants.

use std::time::Duration;

// Population: strands per viewport-width pixel, capped per session
pub const STRAND_DENSITY: f32 = 0.05;
pub const MAX_STRANDS: usize = 150;

// Every strand shares the same fixed heading
pub const STRAND_ANGLE_DEGREES: f32 = -60.0;

// Anchor dot drawn at the strand's start point
pub const DOT_RADIUS: f32 = 1.0;
pub const DOT_COLORS: [&str; 3] = ["#FF3F8E", "#04C2C9", "#2E55C1"];

// Orbital drift of the start point around its anchor
pub const ANGULAR_VELOCITY: f32 = 0.0022; // radians per frame
pub const ORBIT_Y_RADIUS: f32 = 100.0; // px; the x radius scales with distance to center

// Pointer-proximity glow. Steps are gated at the bounds, never clamped,
// so a single step may overshoot by at most one increment.
pub const GLOW_RADIUS: f32 = 50.0;
pub const BRIGHTNESS_MIN: f32 = 0.1;
pub const BRIGHTNESS_MAX: f32 = 0.3;
pub const BRIGHTNESS_RISE_STEP: f32 = 0.01;
pub const BRIGHTNESS_FALL_STEP: f32 = 0.0075;

// Pointer samples arriving closer together than this are discarded (~60/s)
pub const POINTER_SAMPLE_INTERVAL: Duration = Duration::from_micros(16_667);

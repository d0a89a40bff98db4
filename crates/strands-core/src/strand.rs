use crate::constants::{
    ANGULAR_VELOCITY, BRIGHTNESS_FALL_STEP, BRIGHTNESS_MAX, BRIGHTNESS_MIN, BRIGHTNESS_RISE_STEP,
    DOT_RADIUS, GLOW_RADIUS, ORBIT_Y_RADIUS,
};
use crate::draw::DrawCmd;
use crate::geometry::distance_to_segment;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::PI;

/// One animated line-segment-plus-dot entity.
///
/// The end point is derived: `end = start + length * (cos angle, sin angle)`
/// holds after construction and after every [`Strand::advance`].
#[derive(Clone, Debug)]
pub struct Strand {
    /// Construction-time start position; the center of the orbital drift.
    anchor: Vec2,
    start: Vec2,
    end: Vec2,
    length: f32,
    angle: f32,
    color: &'static str,
    brightness: f32,
    phase: f32,
    angular_velocity: f32,
}

impl Strand {
    pub fn new(
        anchor: Vec2,
        length: f32,
        angle_degrees: f32,
        color: &'static str,
        phase: f32,
    ) -> Self {
        let angle = angle_degrees.to_radians();
        let mut strand = Self {
            anchor,
            start: anchor,
            end: Vec2::ZERO,
            length,
            angle,
            color,
            brightness: BRIGHTNESS_MIN,
            phase,
            angular_velocity: ANGULAR_VELOCITY,
        };
        strand.end = strand.derived_end();
        strand
    }

    #[inline]
    fn derived_end(&self) -> Vec2 {
        self.start + self.length * Vec2::new(self.angle.cos(), self.angle.sin())
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        self.color
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Distance from the pointer to the nearest point on the segment.
    #[inline]
    pub fn distance_from_pointer(&self, pointer: Vec2) -> f32 {
        distance_to_segment(pointer, self.start, self.end)
    }

    // Gated rather than clamped: a step taken just inside a bound may land
    // past it and is left there, which softens the glow edge.
    fn update_brightness(&mut self, pointer: Vec2) {
        if self.distance_from_pointer(pointer) < GLOW_RADIUS {
            if self.brightness < BRIGHTNESS_MAX {
                self.brightness += BRIGHTNESS_RISE_STEP;
            }
        } else if self.brightness > BRIGHTNESS_MIN {
            self.brightness -= BRIGHTNESS_FALL_STEP;
        }
    }

    /// Per-frame state transition against this frame's pointer snapshot.
    ///
    /// The start point orbits the anchor on an ellipse whose x radius grows
    /// with the anchor's distance from the viewport center and whose y
    /// radius is fixed at [`ORBIT_Y_RADIUS`].
    pub fn advance(&mut self, pointer: Vec2, viewport_center: Vec2) {
        self.phase += self.angular_velocity;
        let x_radius = self.anchor.distance(viewport_center) / PI;
        self.start = self.anchor
            + Vec2::new(
                self.phase.cos() * x_radius,
                self.phase.sin() * ORBIT_Y_RADIUS,
            );
        self.end = self.derived_end();
        self.update_brightness(pointer);
    }

    /// Draw commands for the current state: the translucent white stroke,
    /// then the anchor dot. Pure; repeated calls without [`Strand::advance`]
    /// yield identical output.
    pub fn draw_commands(&self) -> SmallVec<[DrawCmd; 2]> {
        smallvec![
            DrawCmd::Stroke {
                from: self.start,
                to: self.end,
                alpha: self.brightness,
            },
            DrawCmd::Dot {
                center: self.start,
                radius: DOT_RADIUS,
                color: self.color,
            },
        ]
    }
}

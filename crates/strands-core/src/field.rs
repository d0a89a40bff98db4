use crate::constants::{DOT_COLORS, MAX_STRANDS, STRAND_ANGLE_DEGREES, STRAND_DENSITY};
use crate::draw::DrawCmd;
use crate::strand::Strand;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Number of strands for a given viewport width, capped at [`MAX_STRANDS`].
#[inline]
pub fn strand_count(viewport_width: f32) -> usize {
    ((viewport_width * STRAND_DENSITY).round() as usize).min(MAX_STRANDS)
}

/// The full strand population, created once at startup. The count is fixed
/// for the session; no strand is ever added or removed afterwards.
pub struct StrandField {
    pub strands: Vec<Strand>,
}

impl StrandField {
    /// Build the field from a seed so startup layouts are reproducible.
    /// Anchors land on whole pixels anywhere in the viewport; colors and
    /// starting phases are rolled per strand.
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let strands = (0..strand_count(viewport.width))
            .map(|_| {
                let anchor = Vec2::new(
                    (rng.gen::<f32>() * viewport.width).round(),
                    (rng.gen::<f32>() * viewport.height).round(),
                );
                let color = DOT_COLORS[rng.gen_range(0..DOT_COLORS.len())];
                let phase = rng.gen::<f32>() * TAU;
                Strand::new(anchor, viewport.width, STRAND_ANGLE_DEGREES, color, phase)
            })
            .collect();
        Self { strands }
    }

    /// Advance every strand one frame against the shared pointer snapshot
    /// and append its draw commands. The caller clears and reuses `out`.
    pub fn advance(&mut self, pointer: Vec2, viewport: Viewport, out: &mut Vec<DrawCmd>) {
        let center = viewport.center();
        for strand in &mut self.strands {
            strand.advance(pointer, center);
            out.extend(strand.draw_commands());
        }
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }
}

use glam::Vec2;

/// One drawing primitive emitted by a strand.
///
/// Strands describe their appearance as plain data; the web-side renderer
/// applies the commands in order against the shared canvas context, so the
/// simulation never touches surface state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    /// White line from `from` to `to` at the given stroke opacity.
    Stroke { from: Vec2, to: Vec2, alpha: f32 },
    /// Filled circle in one of the palette colors.
    Dot {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
}

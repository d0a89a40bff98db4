use std::f64::consts::TAU;
use strands_core::DrawCmd;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Applies strand draw commands against the shared 2D context.
///
/// Stroke and fill styles are set per command, so strands need no style
/// isolation from one another.
pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self { ctx })
    }

    pub fn clear(&self, width: f32, height: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    pub fn apply(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match *cmd {
                DrawCmd::Stroke { from, to, alpha } => {
                    self.ctx.begin_path();
                    self.ctx
                        .set_stroke_style_str(&format!("rgba(255, 255, 255, {alpha})"));
                    self.ctx.move_to(f64::from(from.x), f64::from(from.y));
                    self.ctx.line_to(f64::from(to.x), f64::from(to.y));
                    self.ctx.stroke();
                }
                DrawCmd::Dot {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.begin_path();
                    self.ctx.set_fill_style_str(color);
                    _ = self.ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(radius),
                        0.0,
                        TAU,
                    );
                    self.ctx.fill();
                }
            }
        }
    }
}

use strands_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window inner size as the logical viewport.
pub fn viewport_size() -> anyhow::Result<Viewport> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let width = window
        .inner_width()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .as_f64()
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .as_f64()
        .unwrap_or(0.0);
    Ok(Viewport::new(width as f32, height as f32))
}

/// Size the canvas backing store to the window and wipe it. Runs at startup
/// and again on every window resize.
pub fn prepare_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Viewport> {
    let viewport = viewport_size()?;
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
    if let Ok(Some(ctx)) = canvas.get_context("2d") {
        if let Ok(ctx) = ctx.dyn_into::<web::CanvasRenderingContext2d>() {
            ctx.clear_rect(0.0, 0.0, f64::from(viewport.width), f64::from(viewport.height));
        }
    }
    Ok(viewport)
}

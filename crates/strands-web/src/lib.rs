#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use strands_core::{PointerTracker, StrandField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("strands-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::prepare_canvas(&canvas)?;
    events::wire_resize(&canvas);

    let field = StrandField::new(viewport, js_sys::Date::now() as u64);
    log::info!(
        "[field] strands={} viewport={}x{}",
        field.len(),
        viewport.width,
        viewport.height
    );

    let pointer = Rc::new(RefCell::new(PointerTracker::new(viewport.center())));
    events::wire_pointermove(pointer.clone());

    let renderer = render::Renderer::new(&canvas)?;

    // Animation driver: one RAF callback at a time, re-registered each frame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        pointer,
        canvas,
        renderer,
        cmds: Vec::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

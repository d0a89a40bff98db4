use std::cell::RefCell;
use std::rc::Rc;
use strands_core::{DrawCmd, PointerTracker, StrandField, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::Renderer;

pub struct FrameContext {
    pub field: StrandField,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Renderer,
    pub cmds: Vec<DrawCmd>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let pointer = self.pointer.borrow().snapshot();

        self.renderer.clear(viewport.width, viewport.height);
        self.cmds.clear();
        self.field.advance(pointer, viewport, &mut self.cmds);
        self.renderer.apply(&self.cmds);
    }
}

/// Drive [`FrameContext::frame`] from requestAnimationFrame, re-registering
/// the callback each frame. Runs until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use strands_core::PointerTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Window pointermove -> tracker. The tracker discards samples arriving
/// faster than the display cadence, so this listener stays dumb.
pub fn wire_pointermove(tracker: Rc<RefCell<PointerTracker>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        _ = tracker
            .borrow_mut()
            .sample(ev.client_x() as f32, ev.client_y() as f32, Instant::now());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Window resize -> resize and wipe the canvas. The strand population is
/// left alone; only the surface changes.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(e) = dom::prepare_canvas(&canvas) {
            log::error!("resize error: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

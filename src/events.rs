use crate::dom;
use showcase_core::scroll_percent;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Store the page's scroll percent in `latest` on every scroll event.
///
/// The frame loop reads it; nothing else runs inside the handler.
pub fn wire_scroll(latest: Rc<Cell<f32>>) {
    let read = move || {
        if let Some((top, height, client)) = dom::window_document()
            .as_ref()
            .and_then(dom::page_scroll_metrics)
        {
            latest.set(scroll_percent(top, height, client));
        }
    };
    read();
    let closure = Closure::wrap(Box::new(read) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

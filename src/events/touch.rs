use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A finger on the canvas counts as holding ascend. Default touch handling
/// (scroll, zoom) is suppressed.
pub fn wire_touch(canvas: &web::HtmlCanvasElement, input: Rc<RefCell<InputState>>) {
    let input_start = input.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        input_start.borrow_mut().touch_start();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    let end = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        input.borrow_mut().touch_end();
    }) as Box<dyn FnMut(_)>);
    for kind in ["touchend", "touchcancel"] {
        _ = canvas.add_event_listener_with_callback(kind, end.as_ref().unchecked_ref());
    }
    end.forget();
}

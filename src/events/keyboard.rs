use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Holds ascend between `keydown` and `keyup` of the ascend key.
pub fn wire_ascend_keys(document: &web::Document, input: Rc<RefCell<InputState>>) {
    let input_down = input.clone();
    let down = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if input_down.borrow_mut().key_down(&ev.code()) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
    down.forget();

    let up = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if input.borrow_mut().key_up(&ev.code()) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
    up.forget();
}

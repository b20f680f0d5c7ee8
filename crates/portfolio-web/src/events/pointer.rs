//! Pointer wiring for the first-person locomotion strategy: click locks
//! the pointer to the canvas, and locked mouse movement accumulates look
//! deltas for the next frame.

use portfolio_core::{InputState, LocomotionMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_look(
    canvas: &web::HtmlCanvasElement,
    input: Rc<RefCell<InputState>>,
    mode: LocomotionMode,
) {
    if mode != LocomotionMode::PointerLockFps {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };

    {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            canvas.request_pointer_lock();
        }) as Box<dyn FnMut()>);
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let locked = web::window()
                .and_then(|w| w.document())
                .and_then(|d| d.pointer_lock_element())
                .is_some();
            if locked {
                input
                    .borrow_mut()
                    .add_look_delta(ev.movement_x() as f32, ev.movement_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

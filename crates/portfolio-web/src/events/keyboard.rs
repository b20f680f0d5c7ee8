//! Keyboard wiring: keydown/keyup feed the shared input snapshot that the
//! frame loop hands to the controller.

use portfolio_core::{InputState, NavKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_movement_keys(input: Rc<RefCell<InputState>>) {
    let Some(window) = web::window() else {
        return;
    };

    {
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key().to_lowercase();
            if let Some(nav) = NavKey::from_key(&key) {
                input.borrow_mut().set_pressed(nav, true);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key().to_lowercase();
            if let Some(nav) = NavKey::from_key(&key) {
                input.borrow_mut().set_pressed(nav, false);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keyup events never arrive once focus is gone; drop everything held.
    {
        let closure = Closure::wrap(Box::new(move || {
            input.borrow_mut().clear();
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

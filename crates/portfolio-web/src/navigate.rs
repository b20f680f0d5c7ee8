//! Portal navigation: fetch the section page and redirect the browser to
//! the resolved URL. A failed fetch must not leave the scene wedged behind
//! the overlay, so errors resume the controller instead of propagating.

use crate::overlay;
use portfolio_core::{SceneController, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn load_section(
    section: Section,
    controller: Rc<RefCell<SceneController>>,
    document: web::Document,
) {
    spawn_local(async move {
        if let Err(err) = go(section).await {
            log::error!("[navigate] section load failed: {:?}", err);
            overlay::set_opacity(&document, 0.0);
            controller.borrow_mut().abort_transition();
        }
    });
}

async fn go(section: Section) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(section.page())).await?;
    let resp: web::Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "{} fetch returned HTTP {}",
            section.page(),
            resp.status()
        )));
    }
    window.location().set_href(&resp.url())
}

#![cfg(target_arch = "wasm32")]

pub mod contact_form;
pub mod dom;
pub mod events;
pub mod frame;
pub mod navigate;
pub mod overlay;
pub mod render;

use instant::Instant;
use portfolio_core::{starfield, InputState, SceneController, STAR_COUNT, STAR_SEED, STAR_SPREAD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Section pages carry the contact form but no scene canvas; wiring is
    // a no-op when the element is absent.
    contact_form::wire_contact_form(&document);

    let Some(canvas_el) = document.get_element_by_id("bg") else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(&canvas);

    // The page can select a locomotion strategy on the canvas element.
    let locomotion = canvas
        .get_attribute("data-locomotion")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    log::info!("[scene] locomotion strategy {:?}", locomotion);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let controller = Rc::new(RefCell::new(SceneController::new(locomotion, aspect)));
    let input = Rc::new(RefCell::new(InputState::default()));

    events::wire_movement_keys(input.clone());
    events::wire_pointer_look(&canvas, input.clone(), locomotion);

    let gpu = frame::init_gpu(&canvas).await;
    let stars = starfield::scatter(STAR_COUNT, STAR_SPREAD, STAR_SEED);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        controller,
        input,
        gpu,
        canvas,
        document,
        stars,
        last_instant: Instant::now(),
    })));

    Ok(())
}

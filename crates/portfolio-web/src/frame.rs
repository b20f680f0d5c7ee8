//! The per-frame driver: advances the controller, mirrors the transition
//! onto the DOM overlay, kicks off navigation, and draws the scene.

use crate::{navigate, overlay, render};
use glam::Vec3;
use instant::Instant;
use portfolio_core::{InputState, LocomotionMode, SceneController, STAR_RADIUS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.95];
const PLAYER_COLOR: [f32; 4] = [0.85, 0.85, 0.95, 1.0];
const PLAYER_MARKER_SCALE: f32 = 2.0;

pub struct FrameContext {
    pub controller: Rc<RefCell<SceneController>>,
    pub input: Rc<RefCell<InputState>>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub stars: Vec<Vec3>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let nav = {
            let mut input = self.input.borrow_mut();
            let mut ctl = self.controller.borrow_mut();
            let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
            ctl.set_aspect(aspect);
            ctl.frame(&mut input, dt)
        };

        overlay::set_opacity(&self.document, self.controller.borrow().overlay_opacity());

        if let Some(request) = nav {
            navigate::load_section(
                request.section,
                self.controller.clone(),
                self.document.clone(),
            );
        }

        if let Some(gpu) = &mut self.gpu {
            let ctl = self.controller.borrow();
            let instances = build_instances(&ctl, &self.stars);
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(ctl.camera(), &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn build_instances(ctl: &SceneController, stars: &[Vec3]) -> Vec<render::Instance> {
    let mut instances = Vec::with_capacity(stars.len() + 8);
    for star in stars {
        instances.push(render::Instance {
            position: *star,
            scale: STAR_RADIUS * 2.0,
            color: STAR_COLOR,
            ring: 0.0,
        });
    }
    for portal in ctl.visible_portals() {
        let outer = portal.radius + portal.tube;
        instances.push(render::Instance {
            position: portal.center,
            scale: outer * 2.0,
            color: [portal.color[0], portal.color[1], portal.color[2], 1.0],
            ring: (portal.radius - portal.tube) / outer,
        });
    }
    // The free-orbit strategy flies the camera itself; there is no ship.
    if ctl.locomotion() != LocomotionMode::FreeOrbit {
        instances.push(render::Instance {
            position: ctl.player.position,
            scale: PLAYER_MARKER_SCALE,
            color: PLAYER_COLOR,
            ring: 0.0,
        });
    }
    instances
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // Leak a canvas clone to satisfy the 'static lifetime for the surface.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

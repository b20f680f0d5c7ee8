//! The scene/navigation controller: a two-phase scene (intro vs. menu),
//! per-frame movement and camera follow, portal containment tests, and the
//! single in-flight transition that precedes a mode switch or a page
//! navigation.

use crate::camera::{Camera, FollowCamera};
use crate::input::InputState;
use crate::locomotion::{fps_step, free_orbit_step, LocomotionMode};
use crate::player::Player;
use crate::portal::{Portal, PortalAction, Section};
use crate::transition::ZoomTransition;
use glam::Vec3;
use std::time::Duration;

/// Top-level scene phase. Exactly one is active; the observed transition
/// is one-directional (intro to menu).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMode {
    Intro,
    Menu,
}

/// Emitted when a navigation portal's transition completes: the host
/// should fetch the section page and redirect to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub section: Section,
}

pub struct SceneController {
    mode: SceneMode,
    pub player: Player,
    follow: FollowCamera,
    portals: Vec<Portal>,
    locomotion: LocomotionMode,
    transition: Option<ZoomTransition>,
    pending: Option<PortalAction>,
    awaiting_nav: bool,
}

impl SceneController {
    pub fn new(locomotion: LocomotionMode, aspect: f32) -> Self {
        Self {
            mode: SceneMode::Intro,
            player: Player::default(),
            follow: FollowCamera::new(aspect),
            portals: default_portals(),
            locomotion,
            transition: None,
            pending: None,
            awaiting_nav: false,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn locomotion(&self) -> LocomotionMode {
        self.locomotion
    }

    pub fn camera(&self) -> &Camera {
        &self.follow.camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.follow.camera.aspect = aspect;
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    pub fn visible_portals(&self) -> impl Iterator<Item = &Portal> {
        self.portals.iter().filter(|p| p.visible)
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn overlay_opacity(&self) -> f32 {
        match &self.transition {
            Some(t) => t.overlay_opacity(),
            None => 0.0,
        }
    }

    /// Advance one frame. While a transition is in flight the player and
    /// follow camera are frozen and the camera eye comes from the zoom
    /// animation; otherwise movement runs and portal volumes are tested.
    pub fn frame(&mut self, input: &mut InputState, dt: Duration) -> Option<NavRequest> {
        if let Some(transition) = &mut self.transition {
            let done = transition.advance(dt);
            self.follow.camera.eye = transition.camera_eye();
            if !done {
                return None;
            }
            self.transition = None;
            return self.finish_transition();
        }

        // Once a page navigation has been requested the scene idles until
        // the browser leaves (or the host aborts after a failed fetch).
        if self.awaiting_nav {
            return None;
        }

        self.step_locomotion(input, dt);

        let probe = self.probe_position();
        // First containment hit wins; remaining portals are not tested
        // this frame, and none are tested again until the transition ends.
        let hit = self
            .portals
            .iter()
            .find(|p| p.visible && p.contains(probe))
            .map(|p| (p.label, p.action));
        if let Some((label, action)) = hit {
            log::info!("[portal] entered {label}");
            self.pending = Some(action);
            self.transition = Some(ZoomTransition::toward_player(
                self.follow.camera.eye,
                &self.player,
            ));
        }
        None
    }

    /// Resume active navigation after a failed section fetch so the scene
    /// is not left wedged behind the overlay.
    pub fn abort_transition(&mut self) {
        self.transition = None;
        self.pending = None;
        self.awaiting_nav = false;
    }

    fn step_locomotion(&mut self, input: &mut InputState, dt: Duration) {
        match self.locomotion {
            LocomotionMode::TrackedFollow => {
                self.player.step(input, dt);
                self.follow.follow(self.player.position, dt);
            }
            LocomotionMode::FreeOrbit => {
                free_orbit_step(&mut self.follow.camera, input, dt);
            }
            LocomotionMode::PointerLockFps => {
                fps_step(&mut self.player, &mut self.follow.camera, input, dt);
            }
        }
    }

    /// The position tested against portal volumes: the camera itself in
    /// free-orbit flight, the player otherwise.
    fn probe_position(&self) -> Vec3 {
        match self.locomotion {
            LocomotionMode::FreeOrbit => self.follow.camera.eye,
            _ => self.player.position,
        }
    }

    fn finish_transition(&mut self) -> Option<NavRequest> {
        match self.pending.take() {
            Some(PortalAction::EnterMenu) => {
                self.enter_menu();
                None
            }
            Some(PortalAction::Navigate(section)) => {
                self.awaiting_nav = true;
                Some(NavRequest { section })
            }
            None => None,
        }
    }

    fn enter_menu(&mut self) {
        self.mode = SceneMode::Menu;
        for portal in &mut self.portals {
            portal.visible = matches!(portal.action, PortalAction::Navigate(_));
        }
        // Reposition at the menu origin, outside every menu volume.
        self.player.position = Vec3::ZERO;
        log::info!("[scene] entering menu");
    }
}

/// The portal layout: one intro ring, then the three section rings shown
/// once the menu phase begins.
fn default_portals() -> Vec<Portal> {
    let mut portals = vec![
        Portal::new(
            "Enter",
            Vec3::new(0.0, 0.0, -20.0),
            [0.0, 1.0, 0.0],
            PortalAction::EnterMenu,
        ),
        Portal::new(
            "About Me",
            Vec3::new(-30.0, 0.0, -20.0),
            [1.0, 0.0, 0.0],
            PortalAction::Navigate(Section::About),
        ),
        Portal::new(
            "Projects",
            Vec3::new(0.0, 0.0, -40.0),
            [0.0, 1.0, 0.0],
            PortalAction::Navigate(Section::Projects),
        ),
        Portal::new(
            "Contact",
            Vec3::new(30.0, 0.0, -30.0),
            [0.0, 0.0, 1.0],
            PortalAction::Navigate(Section::Contact),
        ),
    ];
    for portal in &mut portals[1..] {
        portal.visible = false;
    }
    portals
}

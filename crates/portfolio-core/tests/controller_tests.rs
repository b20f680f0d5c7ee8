// Tests for the scene state machine: portal containment, the single
// in-flight transition, and the intro-to-menu switch.

use glam::Vec3;
use portfolio_core::{
    InputState, LocomotionMode, SceneController, SceneMode, Section, ZOOM_BEHIND_DISTANCE,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_nanos(16_666_667);
const ASPECT: f32 = 16.0 / 9.0;

fn controller() -> SceneController {
    SceneController::new(LocomotionMode::TrackedFollow, ASPECT)
}

fn idle() -> InputState {
    InputState::default()
}

/// Drive whole transition frames: 1000 ms in two 600 ms steps.
fn run_transition_to_completion(ctl: &mut SceneController) -> Option<portfolio_core::NavRequest> {
    let mut input = idle();
    let mut result = None;
    for _ in 0..2 {
        if let Some(req) = ctl.frame(&mut input, Duration::from_millis(600)) {
            result = Some(req);
        }
    }
    result
}

#[test]
fn starts_in_intro_with_only_the_intro_portal_visible() {
    let ctl = controller();
    assert_eq!(ctl.mode(), SceneMode::Intro);
    let visible: Vec<_> = ctl.visible_portals().map(|p| p.label).collect();
    assert_eq!(visible, ["Enter"]);
}

#[test]
fn point_outside_every_portal_triggers_nothing() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(100.0, 100.0, 100.0);
    let mut input = idle();
    for _ in 0..5 {
        assert!(ctl.frame(&mut input, FRAME).is_none());
        assert!(!ctl.in_transition());
    }
}

#[test]
fn point_inside_intro_portal_arms_exactly_one_transition() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();

    assert!(ctl.frame(&mut input, FRAME).is_none());
    assert!(ctl.in_transition());
    assert_eq!(ctl.overlay_opacity(), 1.0);

    // Further frames keep the same transition in flight; nothing re-arms.
    ctl.frame(&mut input, FRAME);
    assert!(ctl.in_transition());
}

#[test]
fn player_is_frozen_while_a_transition_is_in_flight() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);
    assert!(ctl.in_transition());

    let before = ctl.player.position;
    let mut thrust = InputState {
        forward: true,
        ..Default::default()
    };
    ctl.frame(&mut thrust, FRAME);
    assert_eq!(ctl.player.position, before);
}

#[test]
fn transition_midpoint_is_the_halfway_lerp() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);

    let start_eye = ctl.camera().eye;
    let target_eye = ctl.player.point_behind(ZOOM_BEHIND_DISTANCE);

    ctl.frame(&mut input, Duration::from_millis(500));
    let expected = start_eye.lerp(target_eye, 0.5);
    assert!(
        (ctl.camera().eye - expected).length() < 1e-3,
        "eye {:?} expected {:?}",
        ctl.camera().eye,
        expected
    );
}

#[test]
fn overlay_is_opaque_for_the_whole_flight_and_clears_after() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);
    assert_eq!(ctl.overlay_opacity(), 1.0);

    ctl.frame(&mut input, Duration::from_millis(900));
    assert_eq!(ctl.overlay_opacity(), 1.0);

    ctl.frame(&mut input, Duration::from_millis(200));
    assert!(!ctl.in_transition());
    assert_eq!(ctl.overlay_opacity(), 0.0);
}

#[test]
fn intro_transition_switches_to_menu_and_resets_the_player() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);
    assert!(run_transition_to_completion(&mut ctl).is_none());

    assert_eq!(ctl.mode(), SceneMode::Menu);
    assert_eq!(ctl.player.position, Vec3::ZERO);
    let visible: Vec<_> = ctl.visible_portals().map(|p| p.label).collect();
    assert_eq!(visible, ["About Me", "Projects", "Contact"]);
}

#[test]
fn section_portal_emits_a_navigation_request_on_completion() {
    let mut ctl = controller();
    // Walk the intro first so the menu portals are live.
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);
    run_transition_to_completion(&mut ctl);

    ctl.player.position = Vec3::new(-30.0, 0.0, -20.0);
    assert!(ctl.frame(&mut input, FRAME).is_none());
    assert!(ctl.in_transition());

    let request = run_transition_to_completion(&mut ctl).expect("navigation request");
    assert_eq!(request.section, Section::About);
}

#[test]
fn scene_idles_after_navigation_until_aborted() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(0.0, 0.0, -20.0);
    let mut input = idle();
    ctl.frame(&mut input, FRAME);
    run_transition_to_completion(&mut ctl);

    ctl.player.position = Vec3::new(0.0, 0.0, -40.0); // Projects ring
    ctl.frame(&mut input, FRAME);
    let request = run_transition_to_completion(&mut ctl).expect("navigation request");
    assert_eq!(request.section, Section::Projects);

    // Still inside the ring, but navigation is pending: nothing re-arms
    // and movement stays suspended.
    let frozen = ctl.player.position;
    let mut thrust = InputState {
        forward: true,
        ..Default::default()
    };
    for _ in 0..3 {
        assert!(ctl.frame(&mut thrust, FRAME).is_none());
        assert!(!ctl.in_transition());
        assert_eq!(ctl.player.position, frozen);
    }

    // A failed fetch aborts; control returns. Move clear of the ring and
    // confirm movement works again.
    ctl.abort_transition();
    ctl.player.position = Vec3::new(100.0, 0.0, 0.0);
    ctl.frame(&mut thrust, FRAME);
    assert!(ctl.player.position.z < 0.0, "movement should resume after abort");
}

#[test]
fn follow_camera_tracks_the_player_between_portals() {
    let mut ctl = controller();
    ctl.player.position = Vec3::new(5.0, 0.0, 5.0);
    let mut input = idle();
    let eye_before = ctl.camera().eye;
    ctl.frame(&mut input, FRAME);
    let eye_after = ctl.camera().eye;

    // One 60 Hz frame closes a tenth of the gap toward player + offset.
    let target = ctl.player.position + portfolio_core::CAMERA_OFFSET;
    let expected = eye_before + (target - eye_before) * 0.1;
    assert!((eye_after - expected).length() < 1e-3);
    assert_eq!(ctl.camera().target, ctl.player.position);
}

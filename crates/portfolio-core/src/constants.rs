// Movement, camera, portal, and transition tuning constants.

use glam::Vec3;
use std::time::Duration;

// Player movement
pub const PLAYER_SPEED: f32 = 10.0; // world units per second
pub const ROLL_STEP: f32 = 0.05; // radians added per turning frame
pub const YAW_STEP: f32 = 0.02; // radians added per banking frame
pub const ROLL_LIMIT: f32 = 0.3; // radians, both signs

// Damping factors are expressed as "fraction retained per reference frame"
// and raised to dt/REF_FRAME_SECONDS, so behavior is independent of the
// display refresh rate while matching the original tuning at 60 Hz.
pub const REF_FRAME_SECONDS: f32 = 1.0 / 60.0;
pub const ROLL_KEEP_PER_FRAME: f32 = 0.9;
pub const CAMERA_KEEP_PER_FRAME: f32 = 0.9; // complement of the 0.1 lerp factor
pub const CURSOR_KEEP_PER_FRAME: f32 = 0.9;

// Camera
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 3.0, 10.0);
pub const CAMERA_START_Z: f32 = 30.0;
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Portals
pub const PORTAL_RADIUS: f32 = 10.0;
pub const PORTAL_TUBE: f32 = 3.0;

// Transition
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);
pub const ZOOM_BEHIND_DISTANCE: f32 = 5.0;

// Star backdrop
pub const STAR_COUNT: usize = 200;
pub const STAR_SPREAD: f32 = 100.0;
pub const STAR_RADIUS: f32 = 0.25;
pub const STAR_SEED: u64 = 42;

// First-person locomotion
pub const FPS_EYE_HEIGHT: f32 = 1.6;
pub const FPS_LOOK_SENSITIVITY: f32 = 0.0025; // radians per pointer pixel
pub const FPS_PITCH_LIMIT: f32 = 1.5; // just short of straight up/down

// About-page cursor effect
pub const CURSOR_PLANE_Z: f32 = -25.0;

/// Fraction of a per-frame quantity retained after `dt_sec`, given the
/// fraction it would retain over one reference frame.
#[inline]
pub fn retained(keep_per_frame: f32, dt_sec: f32) -> f32 {
    keep_per_frame.powf(dt_sec / REF_FRAME_SECONDS)
}

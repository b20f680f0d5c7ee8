//! Locomotion strategies: how keyboard (and pointer) input becomes
//! player/camera motion. One strategy is selected at scene construction.

use crate::camera::Camera;
use crate::constants::{FPS_EYE_HEIGHT, FPS_LOOK_SENSITIVITY, FPS_PITCH_LIMIT, PLAYER_SPEED};
use crate::input::InputState;
use crate::player::Player;
use glam::{Quat, Vec3};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocomotionMode {
    /// Banking spaceship with a damped chase camera.
    #[default]
    TrackedFollow,
    /// The keys translate the camera itself along its local axes.
    FreeOrbit,
    /// Pointer-look first person on the ground plane.
    PointerLockFps,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locomotion mode: {0}")]
pub struct ParseLocomotionError(String);

impl FromStr for LocomotionMode {
    type Err = ParseLocomotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tracked-follow" | "tracked" => Ok(Self::TrackedFollow),
            "free-orbit" | "orbit" => Ok(Self::FreeOrbit),
            "pointer-lock-fps" | "fps" => Ok(Self::PointerLockFps),
            other => Err(ParseLocomotionError(other.to_string())),
        }
    }
}

/// Free-orbit flight: forward/back along the view direction, turn keys
/// strafe, ascend/descend on world y. Eye and target move together so the
/// view direction is preserved.
pub fn free_orbit_step(camera: &mut Camera, input: &InputState, dt: Duration) {
    let forward = camera.forward();
    let right = forward.cross(camera.up).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.turn_right {
        direction += right;
    }
    if input.turn_left {
        direction -= right;
    }
    if input.ascend {
        direction += Vec3::Y;
    }
    if input.descend {
        direction -= Vec3::Y;
    }

    let delta = direction.normalize_or_zero() * (PLAYER_SPEED * dt.as_secs_f32());
    camera.eye += delta;
    camera.target += delta;
}

/// First-person step: pointer deltas turn the head (pitch clamped short of
/// vertical), keys move on the ground plane of the current yaw heading.
pub fn fps_step(player: &mut Player, camera: &mut Camera, input: &mut InputState, dt: Duration) {
    let look = input.take_look_delta();
    player.rotation.y -= look.x * FPS_LOOK_SENSITIVITY;
    player.rotation.x =
        (player.rotation.x - look.y * FPS_LOOK_SENSITIVITY).clamp(-FPS_PITCH_LIMIT, FPS_PITCH_LIMIT);

    let heading = Quat::from_rotation_y(player.rotation.y);
    let forward = heading * Vec3::NEG_Z;
    let right = heading * Vec3::X;

    let mut direction = Vec3::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.turn_right {
        direction += right;
    }
    if input.turn_left {
        direction -= right;
    }

    player.position += direction.normalize_or_zero() * (PLAYER_SPEED * dt.as_secs_f32());

    camera.eye = player.position + Vec3::Y * FPS_EYE_HEIGHT;
    let look_dir = Quat::from_rotation_y(player.rotation.y)
        * Quat::from_rotation_x(player.rotation.x)
        * Vec3::NEG_Z;
    camera.target = camera.eye + look_dir;
}

//! Keyboard-driven player movement with damped banking turns.

use crate::constants::{
    retained, PLAYER_SPEED, ROLL_KEEP_PER_FRAME, ROLL_LIMIT, ROLL_STEP, YAW_STEP,
};
use crate::input::InputState;
use glam::{EulerRot, Quat, Vec3};
use std::time::Duration;

/// The movable player entity: a position and an XYZ Euler rotation.
/// Roll (the z component) is clamped to [`ROLL_LIMIT`] either side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Player {
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Raw movement impulse for the pressed keys, before normalization and
    /// rotation: forward is -z, backward is +z.
    #[inline]
    pub fn impulse(input: &InputState) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if input.forward {
            direction.z -= 1.0;
        }
        if input.backward {
            direction.z += 1.0;
        }
        direction
    }

    /// Advance one frame: bank into turns, decay roll when not turning, and
    /// translate along the rotated impulse at [`PLAYER_SPEED`].
    pub fn step(&mut self, input: &InputState, dt: Duration) {
        let dt_sec = dt.as_secs_f32();

        if input.turn_left {
            if input.thrusting() {
                self.rotation.y += YAW_STEP;
            }
            self.rotation.z += ROLL_STEP;
        }
        if input.turn_right {
            if input.thrusting() {
                self.rotation.y -= YAW_STEP;
            }
            self.rotation.z -= ROLL_STEP;
        }
        self.rotation.z = self.rotation.z.clamp(-ROLL_LIMIT, ROLL_LIMIT);

        if !input.turning() {
            self.rotation.z *= retained(ROLL_KEEP_PER_FRAME, dt_sec);
        }

        let direction = self.orientation() * Self::impulse(input).normalize_or_zero();
        self.position += direction * (PLAYER_SPEED * dt_sec);
    }

    /// A point `distance` units behind the player along its local -z axis;
    /// the zoom transition's camera destination.
    pub fn point_behind(&self, distance: f32) -> Vec3 {
        self.position + self.orientation() * Vec3::new(0.0, 0.0, -distance)
    }
}

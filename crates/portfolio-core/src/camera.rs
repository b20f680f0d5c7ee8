//! Camera description and the damped third-person follow behavior.
//!
//! These types avoid referencing platform-specific APIs and are suitable
//! for both native tests and the web frontend, which consumes them to
//! build view/projection matrices.

use crate::constants::{
    retained, CAMERA_FOVY_DEGREES, CAMERA_KEEP_PER_FRAME, CAMERA_OFFSET, CAMERA_START_Z,
    CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec3};
use std::time::Duration;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The scene's starting camera: pulled back on +z, looking at the origin.
    pub fn scene_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit forward direction, falling back to -z for a degenerate view.
    pub fn forward(&self) -> Vec3 {
        let dir = (self.target - self.eye).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Z
        } else {
            dir
        }
    }
}

/// Third-person follow: the eye chases player + [`CAMERA_OFFSET`] with
/// exponential damping and always looks at the player.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    pub camera: Camera,
    pub offset: Vec3,
}

impl FollowCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::scene_default(aspect),
            offset: CAMERA_OFFSET,
        }
    }

    pub fn follow(&mut self, player_position: Vec3, dt: Duration) {
        let target_eye = player_position + self.offset;
        let alpha = 1.0 - retained(CAMERA_KEEP_PER_FRAME, dt.as_secs_f32());
        self.camera.eye += (target_eye - self.camera.eye) * alpha;
        self.camera.target = player_position;
    }
}

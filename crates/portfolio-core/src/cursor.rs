//! Pointer-follow orientation math used by the about-page scene: objects
//! smoothly turn to face the point where the cursor's ray crosses a fixed
//! plane in front of them.

use crate::camera::Camera;
use crate::constants::{retained, CURSOR_KEEP_PER_FRAME};
use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};
use std::time::Duration;

/// Convert client-space pixel coordinates to normalized device coordinates.
#[inline]
pub fn ndc_from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

/// Compute a world-space ray from NDC through the camera.
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p0 = p_near.xyz() / p_near.w;
    let p1 = p_far.xyz() / p_far.w;
    (p0, (p1 - p0).normalize_or_zero())
}

/// Intersect a ray with the plane z = `plane_z`; `None` when the ray is
/// parallel to the plane or the hit is behind the origin.
pub fn ray_plane_z(origin: Vec3, direction: Vec3, plane_z: f32) -> Option<Vec3> {
    if direction.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - origin.z) / direction.z;
    (t >= 0.0).then(|| origin + direction * t)
}

/// An object that damps its facing direction toward a tracked point.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pub position: Vec3,
    pub facing: Vec3,
}

impl CursorFollower {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            facing: Vec3::Z,
        }
    }

    /// Turn toward `point`, keeping the facing vector unit length.
    pub fn track(&mut self, point: Vec3, dt: Duration) {
        let target = (point - self.position).normalize_or_zero();
        if target == Vec3::ZERO {
            return;
        }
        let alpha = 1.0 - retained(CURSOR_KEEP_PER_FRAME, dt.as_secs_f32());
        let blended = (self.facing + (target - self.facing) * alpha).normalize_or_zero();
        if blended != Vec3::ZERO {
            self.facing = blended;
        }
    }

    /// The point the object should look at, one unit along its facing.
    pub fn look_target(&self) -> Vec3 {
        self.position + self.facing
    }
}

//! One-shot fade/zoom transition, advanced by the external frame driver.

use crate::constants::{TRANSITION_DURATION, ZOOM_BEHIND_DISTANCE};
use crate::player::Player;
use glam::Vec3;
use std::time::Duration;

/// Timed camera-zoom animation played when a portal fires. The value
/// object only accumulates wall-clock time; the frame loop drives it and
/// reads the interpolated camera eye, so there is no callback chain.
#[derive(Clone, Debug)]
pub struct ZoomTransition {
    start_eye: Vec3,
    target_eye: Vec3,
    duration: Duration,
    elapsed: Duration,
}

impl ZoomTransition {
    pub fn new(start_eye: Vec3, target_eye: Vec3) -> Self {
        Self {
            start_eye,
            target_eye,
            duration: TRANSITION_DURATION,
            elapsed: Duration::ZERO,
        }
    }

    /// Zoom from the current camera eye to a point just behind the player.
    pub fn toward_player(camera_eye: Vec3, player: &Player) -> Self {
        Self::new(camera_eye, player.point_behind(ZOOM_BEHIND_DISTANCE))
    }

    /// Accumulate elapsed wall-clock time; returns completion.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Camera eye at the current progress.
    pub fn camera_eye(&self) -> Vec3 {
        self.start_eye.lerp(self.target_eye, self.progress())
    }

    /// The fade overlay is fully opaque for the whole flight and drops
    /// back only on completion; CSS supplies the visual ramp.
    pub fn overlay_opacity(&self) -> f32 {
        if self.is_complete() {
            0.0
        } else {
            1.0
        }
    }
}

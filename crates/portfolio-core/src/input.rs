//! Navigation input snapshot passed into movement each frame.
//!
//! Event handlers at the platform boundary write into an [`InputState`]
//! and the frame driver hands it to the controller, so movement is a
//! function of explicit arguments rather than ambient key-map state.

use glam::Vec2;

/// A key the scene responds to, after DOM key-string mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Ascend,
    Descend,
}

impl NavKey {
    /// Map a lower-cased `KeyboardEvent.key` value to a navigation key.
    /// Unknown keys are ignored by the caller.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "arrowup" => Some(Self::Forward),
            "s" | "arrowdown" => Some(Self::Backward),
            "a" | "arrowleft" => Some(Self::TurnLeft),
            "d" | "arrowright" => Some(Self::TurnRight),
            "q" => Some(Self::Ascend),
            "e" => Some(Self::Descend),
            _ => None,
        }
    }
}

/// Pressed navigation keys plus pointer-look deltas accumulated since the
/// previous frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub ascend: bool,
    pub descend: bool,
    pub look_delta: Vec2,
}

impl InputState {
    pub fn set_pressed(&mut self, key: NavKey, pressed: bool) {
        match key {
            NavKey::Forward => self.forward = pressed,
            NavKey::Backward => self.backward = pressed,
            NavKey::TurnLeft => self.turn_left = pressed,
            NavKey::TurnRight => self.turn_right = pressed,
            NavKey::Ascend => self.ascend = pressed,
            NavKey::Descend => self.descend = pressed,
        }
    }

    /// Accumulate a pointer movement; consumed once per frame.
    pub fn add_look_delta(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Drop all pressed keys, e.g. when the window loses focus and keyup
    /// events will never arrive.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn thrusting(&self) -> bool {
        self.forward || self.backward
    }

    #[inline]
    pub fn turning(&self) -> bool {
        self.turn_left || self.turn_right
    }
}

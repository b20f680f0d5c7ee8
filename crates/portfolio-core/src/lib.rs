pub mod camera;
pub mod constants;
pub mod controller;
pub mod cursor;
pub mod input;
pub mod locomotion;
pub mod player;
pub mod portal;
pub mod starfield;
pub mod transition;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use cursor::*;
pub use input::*;
pub use locomotion::*;
pub use player::*;
pub use portal::*;
pub use transition::*;

pub mod geometry;
pub mod player;
pub mod scene;

pub use player::*;
pub use scene::*;

// Shader pair bundled as a string constant
pub static ICO_WGSL: &str = include_str!("../../shaders/ico.wgsl");

pub mod constants;
pub mod form;
pub mod geometry;
pub mod glow;
pub mod header;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scene;

pub use constants::*;

// Shaders bundled as string constants
pub static WIREFRAME_WGSL: &str = include_str!("../../shaders/wireframe.wgsl");
pub static GLOW_WGSL: &str = include_str!("../../shaders/glow.wgsl");

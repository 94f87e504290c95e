pub mod animator;
pub mod clock;
pub mod displacement;
pub mod geometry;
pub mod particles;
pub mod scene;
pub mod signals;

pub use animator::*;
pub use clock::*;
pub use displacement::*;
pub use geometry::*;
pub use particles::*;
pub use scene::*;
pub use signals::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");

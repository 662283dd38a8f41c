pub mod animation;
pub mod camera;
pub mod renderer;
pub mod scene;

pub use animation::*;
pub use camera::*;
pub use renderer::*;
pub use scene::*;

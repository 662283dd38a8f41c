pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod traits;

pub use scenes::create_courtyard_scene;

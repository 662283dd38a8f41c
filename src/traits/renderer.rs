use crate::frame::FrameInfo;

use super::scene::SceneGraph;

/// Draw delegate invoked once per frame after all transform writes
pub trait FrameRenderer<S: SceneGraph + ?Sized> {
    /// Draw the current state of the scene
    fn draw(&mut self, scene: &S, frame: &FrameInfo) -> anyhow::Result<()>;
}

use glam::{Mat4, Vec3};

/// Camera state the pointer projector needs from the rendering side
pub trait CameraView {
    /// Eye position in world space
    fn eye(&self) -> Vec3;

    /// Combined projection * view matrix for the given aspect ratio
    fn view_projection(&self, aspect: f32) -> Mat4;

    /// Unit vector the camera looks along
    fn forward(&self) -> Vec3;
}

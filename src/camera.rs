use glam::{Mat4, Vec3};

use crate::traits::CameraView;

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Perspective camera looking at a fixed target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.fov_y = degrees.to_radians();
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}

impl Default for PerspectiveCamera {
    /// Raised behind the origin, looking at it
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO)
    }
}

impl CameraView for PerspectiveCamera {
    fn eye(&self) -> Vec3 {
        self.position
    }

    fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

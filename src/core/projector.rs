use glam::{Vec2, Vec3};

use crate::math::Ray;
use crate::traits::CameraView;

use super::viewport::Viewport;

/// World-space pick ray through a pixel of the canvas.
///
/// The pixel is normalized to device coordinates (y flipped), unprojected
/// onto the far plane and joined to the camera eye.
pub fn pointer_ray(pointer: Vec2, viewport: Viewport, camera: &dyn CameraView) -> Ray {
    let ndc = viewport.to_ndc(pointer);
    ndc_ray(ndc, viewport.aspect(), camera)
}

/// Pick ray through a point already in device coordinates
pub fn ndc_ray(ndc: Vec2, aspect: f32, camera: &dyn CameraView) -> Ray {
    let inverse = camera.view_projection(aspect).inverse();
    let eye = camera.eye();
    let through = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    Ray::new(eye, through - eye)
}

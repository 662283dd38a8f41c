use glam::Vec3;

use super::ray::Ray;

/// Nearest positive distance at which the ray meets the sphere.
/// From inside the sphere this is the exit distance.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let half_b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if near > 1e-4 {
        return Some(near);
    }

    let far = (-half_b + sqrt_d) / a;
    (far > 1e-4).then_some(far)
}

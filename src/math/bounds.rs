use glam::Vec3;

use super::aabb::AABB;
use super::ray::{intersect_aabb, Ray};
use super::sphere::intersect_sphere;

/// Pick volume of an object, expressed relative to its translation.
/// Boxes stay axis-aligned; rotation is not applied to the pick volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Bounds {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl Bounds {
    pub fn sphere(radius: f32) -> Self {
        Bounds::Sphere { radius }
    }

    /// Box from full edge lengths
    pub fn cuboid(size: Vec3) -> Self {
        Bounds::Box {
            half_extents: size * 0.5,
        }
    }

    /// Distance along `ray` to the volume placed at `center`
    pub fn intersect(&self, ray: &Ray, center: Vec3) -> Option<f32> {
        match *self {
            Bounds::Sphere { radius } => intersect_sphere(ray, center, radius),
            Bounds::Box { half_extents } => {
                let aabb = AABB::from_center(center, half_extents);
                intersect_aabb(ray, aabb.min, aabb.max)
            }
        }
    }
}

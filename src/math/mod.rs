mod aabb;
mod bounds;
mod ray;
mod sphere;

pub use aabb::AABB;
pub use bounds::Bounds;
pub use ray::{intersect_aabb, Ray};
pub use sphere::intersect_sphere;

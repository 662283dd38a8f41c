use glam::Vec3;

/// World-space ray with a unit-length direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Slab test against an axis-aligned box.
/// Returns the entry distance, or the exit distance when the origin is inside.
pub fn intersect_aabb(ray: &Ray, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero components so parallel rays get an effectively infinite slab
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

    let t_min = (box_min - ray.origin) * inv_dir;
    let t_max = (box_max - ray.origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        (t_far > 0.001).then_some(t_far)
    } else {
        Some(t_near)
    }
}

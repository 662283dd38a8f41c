use glam::Vec3;

use crate::config::SpinConfig;
use crate::scene::{ObjectHandle, Transform};
use crate::traits::Animation;

use super::motion::spin_angle;

/// Showcase cube that turns on X and Y for the whole session
#[derive(Debug, Clone)]
pub struct Spinner {
    target: ObjectHandle,
    baseline: Transform,
    index: usize,
    spin: SpinConfig,
}

impl Spinner {
    pub fn new(target: ObjectHandle, baseline: Transform, index: usize, spin: SpinConfig) -> Self {
        Self {
            target,
            baseline,
            index,
            spin,
        }
    }
}

impl Animation for Spinner {
    fn target(&self) -> ObjectHandle {
        self.target
    }

    fn advance(&mut self, _now: f32) {}

    fn sample(&self, now: f32) -> Transform {
        let angle = spin_angle(now, self.index, &self.spin);
        Transform {
            translation: self.baseline.translation,
            rotation: Vec3::new(angle, angle, self.baseline.rotation.z),
        }
    }

    fn is_active(&self) -> bool {
        true
    }
}

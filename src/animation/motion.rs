//! Pure motion curves. Every function maps elapsed seconds to an offset and
//! holds no state, so sampling twice at the same time gives the same answer.

use std::f32::consts::PI;

use glam::Vec3;

use crate::config::{BounceConfig, RiseConfig, SpinConfig};

/// Height above baseline of a bouncing object `t` seconds into the bounce.
///
/// A rectified sine touches zero at every half period (the ground strike)
/// under an exponentially decaying envelope.
pub fn bounce_height(t: f32, bounce: &BounceConfig) -> f32 {
    (t * bounce.frequency * PI).sin().abs() * bounce_envelope(t, bounce)
}

/// Peak height reachable at time `t`
pub fn bounce_envelope(t: f32, bounce: &BounceConfig) -> f32 {
    bounce.peak_height * (-t * bounce.decay_rate).exp()
}

/// Free tumble added to the baseline rotation; not damped
pub fn tumble(t: f32, bounce: &BounceConfig) -> Vec3 {
    bounce.spin_rates * t
}

/// Cubic ease-out on `[0, 1]`
pub fn ease_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Rise progress for `elapsed` seconds, clamped to `[0, 1]`
pub fn rise_progress(elapsed: f32, rise: &RiseConfig) -> f32 {
    (elapsed / rise.duration).clamp(0.0, 1.0)
}

/// Height above baseline of a rising object at the given progress
pub fn rise_offset(progress: f32, rise: &RiseConfig) -> f32 {
    rise.height * ease_out_cubic(progress)
}

/// Spin angle of the showcase cube at `index`, from absolute session time
pub fn spin_angle(time: f32, index: usize, spin: &SpinConfig) -> f32 {
    let speed = spin.base_speed + index as f32 * spin.speed_step;
    time * speed
}

use crate::scene::{ObjectHandle, Transform};

/// Per-object animation driven by the frame orchestrator
pub trait Animation {
    /// Object whose transform this animation writes
    fn target(&self) -> ObjectHandle;

    /// Resolve completion transitions for time `now`
    fn advance(&mut self, now: f32);

    /// Transform to write for time `now`; pure
    fn sample(&self, now: f32) -> Transform;

    /// Whether the animation is currently moving its object
    fn is_active(&self) -> bool;
}

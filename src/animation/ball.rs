use crate::config::BounceConfig;
use crate::core::since;
use crate::scene::{ObjectHandle, Transform};
use crate::traits::Animation;

use super::motion::{bounce_height, tumble};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallPhase {
    Idle,
    Playing { started_at: f32 },
}

/// Result of a primary pick landing on the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallTransition {
    Started,
    /// A pick during a bounce stops it instead of restarting
    Stopped,
}

/// Bounce state of the ball. Re-picking toggles the bounce off.
#[derive(Debug, Clone)]
pub struct BallAnimation {
    target: ObjectHandle,
    baseline: Transform,
    bounce: BounceConfig,
    phase: BallPhase,
}

impl BallAnimation {
    pub fn new(target: ObjectHandle, baseline: Transform, bounce: BounceConfig) -> Self {
        Self {
            target,
            baseline,
            bounce,
            phase: BallPhase::Idle,
        }
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    pub fn baseline(&self) -> Transform {
        self.baseline
    }

    /// Toggle the bounce. A bounce whose duration has run out counts as
    /// idle even if no frame has retired it yet.
    pub fn on_pick(&mut self, now: f32) -> BallTransition {
        match self.elapsed(now) {
            Some(t) if t < self.bounce.duration => {
                self.phase = BallPhase::Idle;
                BallTransition::Stopped
            }
            _ => {
                self.phase = BallPhase::Playing { started_at: now };
                BallTransition::Started
            }
        }
    }

    /// Seconds into the current bounce, if playing
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        match self.phase {
            BallPhase::Idle => None,
            BallPhase::Playing { started_at } => Some(since(started_at, now)),
        }
    }
}

impl Animation for BallAnimation {
    fn target(&self) -> ObjectHandle {
        self.target
    }

    fn advance(&mut self, now: f32) {
        if let Some(elapsed) = self.elapsed(now) {
            if elapsed >= self.bounce.duration {
                log::info!("ball bounce finished after {:.2}s", elapsed);
                self.phase = BallPhase::Idle;
            }
        }
    }

    fn sample(&self, now: f32) -> Transform {
        match self.elapsed(now) {
            Some(t) if t < self.bounce.duration => Transform {
                translation: self.baseline.translation,
                rotation: self.baseline.rotation + tumble(t, &self.bounce),
            }
            .raised(bounce_height(t, &self.bounce)),
            _ => self.baseline,
        }
    }

    fn is_active(&self) -> bool {
        matches!(self.phase, BallPhase::Playing { .. })
    }
}

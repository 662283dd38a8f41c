use crate::config::RiseConfig;
use crate::core::since;
use crate::scene::{ObjectHandle, Transform};
use crate::traits::Animation;

use super::motion::{rise_offset, rise_progress};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorPhase {
    Closed,
    Rising { started_at: f32 },
    /// Fully risen; nothing closes the door again
    Open,
}

/// Result of a secondary pick landing on the door
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorTransition {
    Opening,
    /// Already rising or open; the rise is one-shot
    Ignored,
}

#[derive(Debug, Clone)]
pub struct DoorAnimation {
    target: ObjectHandle,
    baseline: Transform,
    rise: RiseConfig,
    phase: DoorPhase,
}

impl DoorAnimation {
    pub fn new(target: ObjectHandle, baseline: Transform, rise: RiseConfig) -> Self {
        Self {
            target,
            baseline,
            rise,
            phase: DoorPhase::Closed,
        }
    }

    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    pub fn baseline(&self) -> Transform {
        self.baseline
    }

    pub fn on_pick(&mut self, now: f32) -> DoorTransition {
        match self.phase {
            DoorPhase::Closed => {
                self.phase = DoorPhase::Rising { started_at: now };
                DoorTransition::Opening
            }
            DoorPhase::Rising { .. } | DoorPhase::Open => DoorTransition::Ignored,
        }
    }

    fn open_transform(&self) -> Transform {
        self.baseline.raised(self.rise.height)
    }
}

impl Animation for DoorAnimation {
    fn target(&self) -> ObjectHandle {
        self.target
    }

    fn advance(&mut self, now: f32) {
        if let DoorPhase::Rising { started_at } = self.phase {
            if since(started_at, now) >= self.rise.duration {
                log::info!("door fully open");
                self.phase = DoorPhase::Open;
            }
        }
    }

    fn sample(&self, now: f32) -> Transform {
        match self.phase {
            DoorPhase::Closed => self.baseline,
            DoorPhase::Rising { started_at } => {
                let progress = rise_progress(since(started_at, now), &self.rise);
                if progress >= 1.0 {
                    self.open_transform()
                } else {
                    self.baseline.raised(rise_offset(progress, &self.rise))
                }
            }
            DoorPhase::Open => self.open_transform(),
        }
    }

    fn is_active(&self) -> bool {
        matches!(self.phase, DoorPhase::Rising { .. })
    }
}

use std::collections::VecDeque;

use anyhow::Context;

use crate::animation::{BallAnimation, BallTransition, DoorAnimation, DoorTransition, Spinner};
use crate::frame::FrameInfo;
use crate::scene::ObjectHandle;
use crate::traits::{Animation, CameraView, FrameRenderer, SceneGraph};

use super::clock::{Clock, TimeSource};
use super::hit_test::hit_test;
use super::input_adapter::{Gesture, PointerEvent};
use super::projector::pointer_ray;

/// What a single pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Ray missed the candidate; nothing changed
    Miss,
    Ball(BallTransition),
    Door(DoorTransition),
}

/// Owns every animation state of the session and drives one frame at a time.
///
/// Pointer events are queued by the host and resolved at the start of the
/// next frame, stamped with that frame's time. Transforms are written only
/// from [`Session::frame`].
pub struct Session<T: TimeSource = Clock> {
    clock: T,
    ball: BallAnimation,
    door: DoorAnimation,
    spinners: Vec<Spinner>,
    pending: VecDeque<PointerEvent>,
    frame_number: u64,
    last_time: Option<f32>,
}

impl<T: TimeSource> Session<T> {
    pub fn new(clock: T, ball: BallAnimation, door: DoorAnimation) -> Self {
        Self {
            clock,
            ball,
            door,
            spinners: Vec::new(),
            pending: VecDeque::new(),
            frame_number: 0,
            last_time: None,
        }
    }

    pub fn with_spinners(mut self, spinners: Vec<Spinner>) -> Self {
        self.spinners = spinners;
        self
    }

    /// Queue a pointer event for the next frame
    pub fn push_event(&mut self, event: PointerEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Resolve one pointer event against the object its gesture targets
    pub fn pick<S: SceneGraph + ?Sized>(
        &mut self,
        event: &PointerEvent,
        now: f32,
        scene: &S,
        camera: &dyn CameraView,
    ) -> PickOutcome {
        let target = self.candidate(event.gesture);
        let Some(object) = scene.object(target) else {
            log::warn!("pick target {:?} is not in the scene", target);
            return PickOutcome::Miss;
        };

        let ray = pointer_ray(event.position, event.viewport, camera);
        let hits = hit_test(&ray, std::iter::once(object));
        let Some(hit) = hits.nearest() else {
            log::debug!("{:?} pick at {:?} missed {}", event.gesture, event.position, object.name);
            return PickOutcome::Miss;
        };
        log::debug!("{:?} pick hit {} at distance {:.2}", event.gesture, object.name, hit.distance);

        match event.gesture {
            Gesture::Primary => {
                let transition = self.ball.on_pick(now);
                match transition {
                    BallTransition::Started => log::info!("ball bounce started at {:.2}s", now),
                    BallTransition::Stopped => log::info!("ball bounce stopped at {:.2}s", now),
                }
                PickOutcome::Ball(transition)
            }
            Gesture::Secondary => {
                let transition = self.door.on_pick(now);
                match transition {
                    DoorTransition::Opening => log::info!("door rising at {:.2}s", now),
                    DoorTransition::Ignored => log::debug!("door already {:?}", self.door.phase()),
                }
                PickOutcome::Door(transition)
            }
        }
    }

    /// Run one frame: retire finished animations, resolve queued picks,
    /// write every animation that moved, then hand the scene to the renderer.
    pub fn frame<S, R>(
        &mut self,
        scene: &mut S,
        camera: &dyn CameraView,
        renderer: &mut R,
    ) -> anyhow::Result<FrameInfo>
    where
        S: SceneGraph + ?Sized,
        R: FrameRenderer<S> + ?Sized,
    {
        let now = self.clock.now();
        let delta = self.last_time.map_or(0.0, |last| (now - last).max(0.0));

        // Retire expired animations first so picks see the settled phases
        let was_active: Vec<bool> = self
            .animations_mut()
            .map(|animation| {
                let active = animation.is_active();
                animation.advance(now);
                active
            })
            .collect();

        while let Some(event) = self.pending.pop_front() {
            self.pick(&event, now, &*scene, camera);
        }

        // Objects that were moving this frame get written, including the one
        // that just settled, so its terminal pose is what gets drawn
        for (animation, was_active) in self.animations_mut().zip(was_active) {
            if was_active || animation.is_active() {
                let transform = animation.sample(now);
                scene.set_transform(animation.target(), transform);
            }
        }

        let info = FrameInfo::new(self.frame_number, now, delta);
        self.frame_number += 1;
        self.last_time = Some(now);

        renderer
            .draw(&*scene, &info)
            .with_context(|| format!("failed to draw frame {}", info.number))?;
        Ok(info)
    }

    pub fn ball(&self) -> &BallAnimation {
        &self.ball
    }

    pub fn door(&self) -> &DoorAnimation {
        &self.door
    }

    pub fn spinners(&self) -> &[Spinner] {
        &self.spinners
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }

    fn candidate(&self, gesture: Gesture) -> ObjectHandle {
        match gesture {
            Gesture::Primary => self.ball.target(),
            Gesture::Secondary => self.door.target(),
        }
    }

    fn animations_mut(&mut self) -> impl Iterator<Item = &mut dyn Animation> + '_ {
        let ball: &mut dyn Animation = &mut self.ball;
        let door: &mut dyn Animation = &mut self.door;
        std::iter::once(ball)
            .chain(std::iter::once(door))
            .chain(self.spinners.iter_mut().map(|s| s as &mut dyn Animation))
    }
}

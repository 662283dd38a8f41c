use glam::{Vec2, Vec3};
use pick_animator::animation::{BallPhase, BallTransition, DoorPhase, DoorTransition};
use pick_animator::camera::PerspectiveCamera;
use pick_animator::config::AnimationConfig;
use pick_animator::core::{Gesture, ManualClock, PickOutcome, PointerEvent, Session, Viewport};
use pick_animator::frame::FrameInfo;
use pick_animator::scene::{ObjectHandle, Scene};
use pick_animator::scenes::{create_courtyard_scene, Courtyard};
use pick_animator::traits::{CameraView, FrameRenderer, SceneGraph};

/// Records the ball and door heights the renderer was handed
struct Recorder {
    ball: ObjectHandle,
    door: ObjectHandle,
    frames: Vec<(FrameInfo, f32, f32)>,
}

impl FrameRenderer<Scene> for Recorder {
    fn draw(&mut self, scene: &Scene, frame: &FrameInfo) -> anyhow::Result<()> {
        let y = |handle| scene.object(handle).map_or(f32::NAN, |o| o.transform.translation.y);
        self.frames.push((*frame, y(self.ball), y(self.door)));
        Ok(())
    }
}

struct Harness {
    courtyard: Courtyard,
    session: Session<ManualClock>,
    camera: PerspectiveCamera,
    viewport: Viewport,
    recorder: Recorder,
}

impl Harness {
    fn new() -> Self {
        let courtyard = create_courtyard_scene();
        let session = courtyard.session(ManualClock::new(0.0), &AnimationConfig::default());
        let recorder = Recorder {
            ball: courtyard.ball.handle,
            door: courtyard.door.handle,
            frames: Vec::new(),
        };
        Self {
            courtyard,
            session,
            camera: PerspectiveCamera::default(),
            viewport: Viewport::new(800, 600),
            recorder,
        }
    }

    /// Advance the clock to `time` and run one frame
    fn frame_at(&mut self, time: f32) -> FrameInfo {
        self.session.clock_mut().set(time);
        self.session
            .frame(&mut self.courtyard.scene, &self.camera, &mut self.recorder)
            .unwrap()
    }

    /// Pixel under the current position of an object
    fn pixel_of(&self, handle: ObjectHandle) -> Vec2 {
        let center = self.courtyard.scene.object(handle).unwrap().center();
        let ndc = self
            .camera
            .view_projection(self.viewport.aspect())
            .project_point3(center);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width as f32,
            (1.0 - ndc.y) * 0.5 * self.viewport.height as f32,
        )
    }

    fn click(&mut self, gesture: Gesture, position: Vec2) {
        self.session.push_event(PointerEvent {
            gesture,
            position,
            viewport: self.viewport,
        });
    }

    fn click_ball(&mut self) {
        let at = self.pixel_of(self.courtyard.ball.handle);
        self.click(Gesture::Primary, at);
    }

    fn click_door(&mut self) {
        let at = self.pixel_of(self.courtyard.door.handle);
        self.click(Gesture::Secondary, at);
    }

    fn ball_y(&self) -> f32 {
        self.courtyard.scene.object(self.courtyard.ball.handle).unwrap().transform.translation.y
    }

    fn door_y(&self) -> f32 {
        self.courtyard.scene.object(self.courtyard.door.handle).unwrap().transform.translation.y
    }
}

#[cfg(test)]
mod ball_scenario_tests {
    use super::*;

    #[test]
    fn test_bounce_then_return_to_rest() {
        let mut h = Harness::new();
        h.frame_at(9.0);
        assert_eq!(h.ball_y(), -1.5);

        h.click_ball();
        h.frame_at(10.0);
        assert_eq!(h.session.ball().phase(), BallPhase::Playing { started_at: 10.0 });
        assert_eq!(h.ball_y(), -1.5, "bounce starts on the ground");

        h.frame_at(10.1);
        let rising = h.ball_y();
        h.frame_at(10.25);
        let peak = h.ball_y();
        h.frame_at(10.45);
        let falling = h.ball_y();
        assert!(peak > rising && peak > falling, "{} {} {}", rising, peak, falling);
        assert!(peak > -1.5 + 2.0);

        h.frame_at(13.9);
        assert!(h.session.ball().phase() != BallPhase::Idle);

        h.frame_at(14.0);
        assert_eq!(h.session.ball().phase(), BallPhase::Idle);
        assert_eq!(h.ball_y(), -1.5);
        let ball = h.courtyard.scene.object(h.courtyard.ball.handle).unwrap();
        assert_eq!(ball.transform, h.courtyard.ball.baseline);
    }

    #[test]
    fn test_ball_tumbles_while_bouncing() {
        let mut h = Harness::new();
        h.click_ball();
        h.frame_at(1.0);
        h.frame_at(2.0);

        let ball = h.courtyard.scene.object(h.courtyard.ball.handle).unwrap();
        assert_ne!(ball.transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_second_pick_stops_bounce() {
        let mut h = Harness::new();
        h.click_ball();
        h.frame_at(1.0);
        h.frame_at(2.25);
        assert!(h.ball_y() > -1.5);

        // Aim at where the ball is drawn now, mid-air
        h.click_ball();
        h.frame_at(2.3);

        assert_eq!(h.session.ball().phase(), BallPhase::Idle);
        let ball = h.courtyard.scene.object(h.courtyard.ball.handle).unwrap();
        assert_eq!(ball.transform, h.courtyard.ball.baseline);
    }

    #[test]
    fn test_pick_on_expired_bounce_starts_new_one() {
        let mut h = Harness::new();
        h.click_ball();
        h.frame_at(0.0);
        h.frame_at(3.99);

        // Duration runs out before the next frame resolves the click
        h.click_ball();
        h.frame_at(4.5);

        assert_eq!(h.session.ball().phase(), BallPhase::Playing { started_at: 4.5 });
        assert_eq!(h.ball_y(), -1.5, "restarted bounce begins on the ground");

        h.frame_at(4.75);
        assert!(h.ball_y() > -1.5 + 2.0);
    }

    #[test]
    fn test_third_pick_restarts() {
        let mut h = Harness::new();
        let at = h.pixel_of(h.courtyard.ball.handle);
        let event = PointerEvent {
            gesture: Gesture::Primary,
            position: at,
            viewport: h.viewport,
        };
        let scene = h.courtyard.scene.clone();

        let mut pick_at = |now| h.session.pick(&event, now, &scene, &h.camera);
        assert_eq!(pick_at(1.0), PickOutcome::Ball(BallTransition::Started));
        assert_eq!(pick_at(1.5), PickOutcome::Ball(BallTransition::Stopped));
        assert_eq!(pick_at(2.0), PickOutcome::Ball(BallTransition::Started));
        assert_eq!(h.session.ball().phase(), BallPhase::Playing { started_at: 2.0 });
    }
}

#[cfg(test)]
mod door_scenario_tests {
    use super::*;

    #[test]
    fn test_rise_and_stay_open() {
        let mut h = Harness::new();
        h.frame_at(1.0);
        assert_eq!(h.door_y(), 4.5);

        h.click_door();
        h.frame_at(2.0);
        assert_eq!(h.session.door().phase(), DoorPhase::Rising { started_at: 2.0 });
        assert_eq!(h.door_y(), 4.5);

        h.frame_at(3.5);
        let halfway = h.door_y();
        assert!(
            halfway > 4.5 + 6.0 && halfway < 16.5,
            "eased rise is past half height: {}",
            halfway
        );

        h.frame_at(5.0);
        assert_eq!(h.session.door().phase(), DoorPhase::Open);
        assert_eq!(h.door_y(), 16.5);

        h.click_door();
        h.frame_at(9.0);
        assert_eq!(h.session.door().phase(), DoorPhase::Open);
        assert_eq!(h.door_y(), 16.5);

        h.frame_at(60.0);
        assert_eq!(h.door_y(), 16.5);
    }

    #[test]
    fn test_pick_while_rising_is_ignored() {
        let mut h = Harness::new();
        h.click_door();
        h.frame_at(0.5);
        h.frame_at(1.0);

        let at = h.pixel_of(h.courtyard.door.handle);
        let event = PointerEvent {
            gesture: Gesture::Secondary,
            position: at,
            viewport: h.viewport,
        };
        let scene = h.courtyard.scene.clone();
        assert_eq!(
            h.session.pick(&event, 1.0, &scene, &h.camera),
            PickOutcome::Door(DoorTransition::Ignored)
        );
        assert_eq!(h.session.door().phase(), DoorPhase::Rising { started_at: 0.5 });
    }

    #[test]
    fn test_open_door_drawn_on_completing_frame() {
        let mut h = Harness::new();
        h.click_door();
        h.frame_at(0.0);
        h.frame_at(2.9);
        h.frame_at(3.4);

        let (frame, _, door_y) = *h.recorder.frames.last().unwrap();
        assert_eq!(frame.number, 2);
        assert_eq!(door_y, 16.5);
    }
}

#[cfg(test)]
mod pick_routing_tests {
    use super::*;

    #[test]
    fn test_miss_leaves_state_unchanged() {
        let mut h = Harness::new();
        h.click(Gesture::Primary, Vec2::new(0.0, 0.0));
        h.click(Gesture::Secondary, Vec2::new(799.0, 0.0));
        h.frame_at(1.0);

        assert_eq!(h.session.ball().phase(), BallPhase::Idle);
        assert_eq!(h.session.door().phase(), DoorPhase::Closed);
        assert_eq!(h.ball_y(), -1.5);
        assert_eq!(h.door_y(), 4.5);
    }

    #[test]
    fn test_miss_keeps_ball_bouncing() {
        let mut h = Harness::new();
        h.click_ball();
        h.frame_at(1.0);
        h.frame_at(1.2);

        h.click(Gesture::Primary, Vec2::new(0.0, 0.0));
        h.frame_at(1.25);

        assert_eq!(h.session.ball().phase(), BallPhase::Playing { started_at: 1.0 });
        assert!(h.ball_y() > -1.5 + 2.0, "ball still mid-bounce: {}", h.ball_y());
    }

    #[test]
    fn test_miss_keeps_door_rising() {
        let mut h = Harness::new();
        h.click_door();
        h.frame_at(1.0);
        h.frame_at(2.0);
        let before = h.door_y();

        h.click(Gesture::Secondary, Vec2::new(799.0, 0.0));
        h.frame_at(2.5);

        assert_eq!(h.session.door().phase(), DoorPhase::Rising { started_at: 1.0 });
        assert!(h.door_y() > before && h.door_y() < 16.5);
    }

    #[test]
    fn test_gestures_only_reach_their_object() {
        let mut h = Harness::new();
        // Right-click on the ball and left-click on the door do nothing
        let ball_px = h.pixel_of(h.courtyard.ball.handle);
        let door_px = h.pixel_of(h.courtyard.door.handle);
        h.click(Gesture::Secondary, ball_px);
        h.click(Gesture::Primary, door_px);
        h.frame_at(1.0);

        assert_eq!(h.session.ball().phase(), BallPhase::Idle);
        assert_eq!(h.session.door().phase(), DoorPhase::Closed);
    }

    #[test]
    fn test_one_draw_per_frame_after_writes() {
        let mut h = Harness::new();
        h.click_ball();
        h.click_door();
        for i in 0..5 {
            h.frame_at(i as f32 * 0.25);
        }

        assert_eq!(h.recorder.frames.len(), 5);
        let numbers: Vec<u64> = h.recorder.frames.iter().map(|(f, _, _)| f.number).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3, 4]);

        // What the renderer saw is what the scene holds after the last frame
        let (_, ball_y, door_y) = *h.recorder.frames.last().unwrap();
        assert_eq!(ball_y, h.ball_y());
        assert_eq!(door_y, h.door_y());
    }

    #[test]
    fn test_showcase_cubes_spin_with_session_time() {
        let mut h = Harness::new();
        h.frame_at(2.0);

        let first = h.courtyard.showcase[0];
        let cube = h.courtyard.scene.object(first.handle).unwrap();
        assert_eq!(cube.transform.rotation, Vec3::new(2.0, 2.0, 0.0));
        assert_eq!(cube.transform.translation, first.baseline.translation);
    }
}

use glam::Vec3;

use crate::animation::{BallAnimation, DoorAnimation, Spinner};
use crate::config::AnimationConfig;
use crate::core::{Session, TimeSource};
use crate::math::Bounds;
use crate::scene::{ObjectHandle, Scene, Transform};

pub const GROUND_Y: f32 = -2.5;
pub const BALL_RADIUS: f32 = 1.0;
pub const BALL_REST: Vec3 = Vec3::new(-8.0, GROUND_Y + BALL_RADIUS, 4.0);
pub const DOOR_SIZE: Vec3 = Vec3::new(4.0, 14.0, 0.5);
pub const DOOR_REST: Vec3 = Vec3::new(0.0, GROUND_Y + DOOR_SIZE.y * 0.5, -10.0);
pub const SKY_RADIUS: f32 = 50.0;

/// Interactive object plus the resting pose captured when it was placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    pub handle: ObjectHandle,
    pub baseline: Transform,
}

/// Reference scene: ground, walls, props, a character stand-in, the
/// bouncing ball, the rising door, spinning showcase cubes and a sky dome
#[derive(Debug, Clone)]
pub struct Courtyard {
    pub scene: Scene,
    pub ball: Placed,
    pub door: Placed,
    pub showcase: Vec<Placed>,
}

impl Courtyard {
    /// Session driving this courtyard's animations
    pub fn session<T: TimeSource>(&self, clock: T, config: &AnimationConfig) -> Session<T> {
        let spinners = self
            .showcase
            .iter()
            .enumerate()
            .map(|(index, cube)| Spinner::new(cube.handle, cube.baseline, index, config.spin))
            .collect();

        Session::new(
            clock,
            BallAnimation::new(self.ball.handle, self.ball.baseline, config.bounce),
            DoorAnimation::new(self.door.handle, self.door.baseline, config.rise),
        )
        .with_spinners(spinners)
    }
}

fn place(scene: &mut Scene, name: &str, bounds: Bounds, at: Vec3) -> Placed {
    let baseline = Transform::from_translation(at);
    Placed {
        handle: scene.add(name, bounds, baseline),
        baseline,
    }
}

pub fn create_courtyard_scene() -> Courtyard {
    let mut scene = Scene::new();

    // Static surroundings
    place(
        &mut scene,
        "ground",
        Bounds::cuboid(Vec3::new(40.0, 0.1, 40.0)),
        Vec3::new(0.0, GROUND_Y - 0.05, 0.0),
    );
    place(
        &mut scene,
        "wall-back",
        Bounds::cuboid(Vec3::new(40.0, 10.0, 0.5)),
        Vec3::new(0.0, 2.5, -20.0),
    );
    place(
        &mut scene,
        "wall-left",
        Bounds::cuboid(Vec3::new(0.5, 10.0, 40.0)),
        Vec3::new(-20.0, 2.5, 0.0),
    );
    place(
        &mut scene,
        "wall-right",
        Bounds::cuboid(Vec3::new(0.5, 10.0, 40.0)),
        Vec3::new(20.0, 2.5, 0.0),
    );
    place(
        &mut scene,
        "prop-cube",
        Bounds::cuboid(Vec3::splat(4.0)),
        Vec3::new(5.0, 2.0, 0.0),
    );
    place(
        &mut scene,
        "prop-sphere",
        Bounds::sphere(3.0),
        Vec3::new(-4.0, 5.0, 0.0),
    );
    place(
        &mut scene,
        "character",
        Bounds::cuboid(Vec3::new(1.5, 3.5, 1.0)),
        Vec3::new(0.0, GROUND_Y + 1.75, 1.5),
    );

    let ball = place(&mut scene, "ball", Bounds::sphere(BALL_RADIUS), BALL_REST);
    let door = place(&mut scene, "door", Bounds::cuboid(DOOR_SIZE), DOOR_REST);

    let mut showcase = Vec::new();
    for (i, x) in [-2.0, 0.0, 2.0].into_iter().enumerate() {
        showcase.push(place(
            &mut scene,
            &format!("showcase-{}", i),
            Bounds::cuboid(Vec3::ONE),
            Vec3::new(x, 0.0, 0.0),
        ));
    }
    // One cube per texture filter mode, scaled down
    for i in 0..6 {
        let x = (i as f32 - 2.5) * 1.2;
        showcase.push(place(
            &mut scene,
            &format!("filter-{}", i),
            Bounds::cuboid(Vec3::splat(0.8)),
            Vec3::new(x, -2.0, 0.0),
        ));
    }
    showcase.push(place(
        &mut scene,
        "pixelated",
        Bounds::cuboid(Vec3::ONE),
        Vec3::new(0.0, 2.0, 0.0),
    ));

    place(&mut scene, "sky", Bounds::sphere(SKY_RADIUS), Vec3::ZERO);

    log::info!(
        "Courtyard scene created: {} objects ({} spinning)",
        scene.len(),
        showcase.len()
    );

    Courtyard {
        scene,
        ball,
        door,
        showcase,
    }
}

mod courtyard;

pub use courtyard::{create_courtyard_scene, Courtyard, Placed};
pub use courtyard::{BALL_RADIUS, BALL_REST, DOOR_REST, DOOR_SIZE, GROUND_Y, SKY_RADIUS};

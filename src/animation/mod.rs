pub mod ball;
pub mod door;
pub mod motion;
pub mod spinner;

pub use ball::{BallAnimation, BallPhase, BallTransition};
pub use door::{DoorAnimation, DoorPhase, DoorTransition};
pub use spinner::Spinner;

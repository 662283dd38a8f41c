pub mod clock;
pub mod input_adapter;
pub mod projector;
pub mod session;
pub mod viewport;

pub use clock::{since, Clock, ManualClock, TimeSource};
pub use hit_test::{hit_test, Hit, HitResult};
pub use input_adapter::{Gesture, PointerEvent, PointerTracker};
pub use projector::{ndc_ray, pointer_ray};
pub use session::{PickOutcome, Session};
pub use viewport::Viewport;

use crate::scene::{ObjectHandle, PickableObject, Transform};

/// Queryable scene owned by the scene-assembly side
pub trait SceneGraph {
    /// Look up an object by handle
    fn object(&self, handle: ObjectHandle) -> Option<&PickableObject>;

    /// Overwrite an object's transform before the next draw
    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform);
}

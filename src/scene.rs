use glam::Vec3;

use crate::math::Bounds;
use crate::traits::SceneGraph;

/// Stable handle into the scene's object list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub u32);

/// Position and Euler rotation (radians, XYZ order)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Vec3::ZERO,
        }
    }

    /// Same transform lifted by `dy` on the Y axis
    pub fn raised(self, dy: f32) -> Self {
        Self {
            translation: self.translation + Vec3::Y * dy,
            ..self
        }
    }
}

/// Scene entity eligible for pointer hit testing
#[derive(Debug, Clone)]
pub struct PickableObject {
    pub handle: ObjectHandle,
    pub name: String,
    pub bounds: Bounds,
    pub transform: Transform,
}

impl PickableObject {
    pub fn center(&self) -> Vec3 {
        self.transform.translation
    }
}

/// Flat in-memory scene graph
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: Vec<PickableObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its handle
    pub fn add(
        &mut self,
        name: impl Into<String>,
        bounds: Bounds,
        transform: Transform,
    ) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len() as u32);
        self.objects.push(PickableObject {
            handle,
            name: name.into(),
            bounds,
            transform,
        });
        handle
    }

    pub fn objects(&self) -> &[PickableObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneGraph for Scene {
    fn object(&self, handle: ObjectHandle) -> Option<&PickableObject> {
        self.objects.get(handle.0 as usize)
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: Transform) {
        if let Some(object) = self.objects.get_mut(handle.0 as usize) {
            object.transform = transform;
        }
    }
}

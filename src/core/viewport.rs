use glam::Vec2;

/// Canvas size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create new viewport, clamping each side to at least one pixel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Centre of the canvas in pixel space
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    /// Pixel coordinates to normalized device coordinates.
    /// Pixel y grows downward, device y grows upward.
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            pixel.x / self.width as f32 * 2.0 - 1.0,
            1.0 - pixel.y / self.height as f32 * 2.0,
        )
    }
}

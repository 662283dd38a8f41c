use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::viewport::Viewport;

/// Which pointer gesture picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Left click, aimed at the ball
    Primary,
    /// Right click, aimed at the door
    Secondary,
}

/// Pointer press captured with the canvas size it happened on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub gesture: Gesture,
    pub position: Vec2,
    pub viewport: Viewport,
}

/// Adapter that turns Winit window events into pointer events
#[derive(Debug, Clone)]
pub struct PointerTracker {
    /// Current cursor position (relative to window)
    cursor: Option<Vec2>,
    viewport: Viewport,
}

impl PointerTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cursor: None,
            viewport,
        }
    }

    /// Process a Winit WindowEvent, returning a pick when a mapped button goes down
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(Vec2::new(position.x as f32, position.y as f32));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.press(*button),
            _ => None,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.cursor = Some(position);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Button press at the last known cursor position
    pub fn press(&mut self, button: MouseButton) -> Option<PointerEvent> {
        let gesture = Self::mouse_button_to_gesture(button)?;
        let position = self.cursor?;
        Some(PointerEvent {
            gesture,
            position,
            viewport: self.viewport,
        })
    }

    /// Map Winit MouseButton to Gesture
    fn mouse_button_to_gesture(button: MouseButton) -> Option<Gesture> {
        match button {
            MouseButton::Left => Some(Gesture::Primary),
            MouseButton::Right => Some(Gesture::Secondary),
            _ => None,
        }
    }
}

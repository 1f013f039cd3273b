use crate::RenderError;
use glam::{UVec2, Vec2};

/// Host-neutral input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a window pixel (top-left origin, +y down)
    PointerMotion { pos: Vec2 },
    Other,
}

/// A game mode the host feeds events, ticks, and asks to draw, once per frame in that order.
pub trait Mode {
    /// Returns true if the event was consumed
    fn handle_event(&mut self, event: &InputEvent, window_size: UVec2) -> bool;

    fn update(&mut self, elapsed: f32);

    fn draw(&mut self, drawable_size: UVec2) -> Result<(), RenderError>;

    /// Host should stop updating and move on once this is true
    fn is_complete(&self) -> bool;
}

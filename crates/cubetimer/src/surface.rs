//! Drawing surface the timer renders onto.

use cubetimer_engine::coords::{Vec2, Viewport};
use cubetimer_engine::paint::Color;
use cubetimer_engine::scene::Anchor;

/// Text appearance for a single draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
}

/// Minimal render capability: clear plus text.
pub trait Surface {
    /// Size of the drawable area in logical pixels.
    fn viewport(&self) -> Viewport;

    fn clear(&mut self, color: Color);

    fn draw_text(&mut self, text: &str, position: Vec2, style: TextStyle);
}

use crate::coords::Vec2;
use crate::paint::Color;
use crate::text::FontId;

/// Which point of the text block `TextCmd::position` refers to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Anchor {
    /// `position` is the top-left corner of the block.
    #[default]
    TopLeft,
    /// `position` is the center of the block.
    Center,
}

impl Anchor {
    /// Returns the top-left corner for a block of `extent` anchored at `position`.
    #[inline]
    pub fn top_left(self, position: Vec2, extent: Vec2) -> Vec2 {
        match self {
            Anchor::TopLeft => position,
            Anchor::Center => position - extent * 0.5,
        }
    }
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point in logical pixels.
    pub position: Vec2,
    pub anchor: Anchor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_anchor_is_identity() {
        let p = Vec2::new(5.0, 29.0);
        assert_eq!(Anchor::TopLeft.top_left(p, Vec2::new(300.0, 24.0)), p);
    }

    #[test]
    fn center_anchor_offsets_by_half_extent() {
        let p = Vec2::new(400.0, 300.0);
        let tl = Anchor::Center.top_left(p, Vec2::new(470.0, 96.0));
        assert_eq!(tl, Vec2::new(165.0, 252.0));
    }
}

use crate::coords::Vec2;
use crate::paint::Color;
use crate::text::FontId;

use super::{Anchor, TextCmd};

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order. `clear()` keeps the allocation so a
/// list reused across frames stops allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<TextCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[TextCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        position: Vec2,
        anchor: Anchor,
    ) {
        self.items.push(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            position,
            anchor,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_keep_insertion_order_and_clear_resets() {
        let mut list = DrawList::new();
        list.push_text("a", FontId(0), 96.0, Color::BLACK, Vec2::zero(), Anchor::Center);
        list.push_text("b", FontId(0), 24.0, Color::BLACK, Vec2::new(5.0, 5.0), Anchor::TopLeft);

        let texts: Vec<_> = list.items().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);

        list.clear();
        assert!(list.is_empty());
    }
}

//! Paint model shared between the application and the renderer.
//!
//! Colors are linear premultiplied RGBA; glyph coverage from the atlas is
//! multiplied into them in the text shader.

pub mod color;

pub use color::Color;

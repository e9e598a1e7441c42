//! Font loading and text measurement.
//!
//! Fonts are parsed with fontdue; glyph rasterization happens lazily in the
//! text renderer.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

//! Cube timer engine crate.
//!
//! Owns the platform + GPU runtime pieces the timer application draws through:
//! a single winit window, keyboard level tracking, a frame clock and a text
//! renderer backed by a fontdue glyph atlas.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;

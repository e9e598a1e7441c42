//! Scene (draw stream) types.
//!
//! The application records text commands into a `DrawList` each frame; the
//! text renderer consumes them in insertion order.

mod list;
mod text;

pub use list::DrawList;
pub use text::{Anchor, TextCmd};

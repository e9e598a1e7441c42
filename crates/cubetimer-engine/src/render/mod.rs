//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Renderers multiply by `RenderCtx::scale_factor` and the vertex shader
//!   converts physical pixels to NDC using a viewport uniform.

mod atlas;
mod ctx;
pub mod text;

pub use ctx::{RenderCtx, RenderTarget};

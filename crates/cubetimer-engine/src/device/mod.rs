//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue for the timer window,
//! configures its swapchain and hands out one encoder + view per frame.

mod config;
mod gpu;
mod surface;

pub use config::GpuInit;
pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};

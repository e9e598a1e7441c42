//! Time subsystem.
//!
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `MonotonicClock`: seconds since construction, for timing that must not
//!   depend on frame cadence

mod frame_clock;
mod monotonic;

pub use frame_clock::{FrameClock, FrameTime};
pub use monotonic::MonotonicClock;

//! Stopwatch state machine.
//!
//! `TimerController` owns the state, the run timer and the best time. Each
//! frame the application calls `update` with the current key levels, then
//! `render` with a surface.

mod controller;
mod state;

pub use controller::TimerController;
pub use state::TimerState;

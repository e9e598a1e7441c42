//! Speed-cube stopwatch.
//!
//! The timer logic (`timer`, `format`, `store`) talks to the outside world
//! only through the `Clock`, `InputSource` and `Surface` traits, so it runs
//! headless in tests. `app` binds those traits to the engine runtime.

pub mod app;
pub mod clock;
pub mod config;
pub mod format;
pub mod input;
pub mod store;
pub mod surface;
pub mod timer;

pub use config::{AppConfig, DisplayStyle, TimerConfig};
pub use store::{BestTimeStore, FileStore, StoreError};
pub use timer::{TimerController, TimerState};

//! Monotonic time source for the run timer.

use cubetimer_engine::time::MonotonicClock;

/// Monotonic clock reading in seconds.
///
/// Only differences between readings are meaningful.
pub trait Clock {
    fn now(&self) -> f64;
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.now_secs()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

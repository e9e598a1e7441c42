//! Key-level input source.

use cubetimer_engine::input::{InputState, Key};

/// Answers "is this key held right now?".
///
/// Sampled once per update; press/release edges are not reported.
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.key_down(key)
    }
}

use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for a single window.
///
/// Holds "is down" information only; applications sample key levels once per
/// frame rather than consuming press/release edges.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            // Key-up events are not delivered while unfocused; drop
            // everything so no key stays stuck down.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) => {}

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        log::trace!("key down: {key}");
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        log::trace!("key up: {key}");
                    }
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_then_release_tracks_level() {
        let mut input = InputState::default();
        assert!(!input.key_down(Key::Space));

        input.apply_event(&key(Key::Space, KeyState::Pressed));
        assert!(input.key_down(Key::Space));
        assert!(!input.key_down(Key::Enter));

        input.apply_event(&key(Key::Space, KeyState::Released));
        assert!(!input.key_down(Key::Space));
    }

    #[test]
    fn repeated_press_keeps_key_down() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::Space, KeyState::Pressed));
        input.apply_event(&InputEvent::Key {
            key: Key::Space,
            state: KeyState::Pressed,
            repeat: true,
        });
        assert!(input.key_down(Key::Space));
        assert_eq!(input.keys_down.len(), 1);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::Enter, KeyState::Released));
        assert!(input.keys_down.is_empty());
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Focused(true));
        input.apply_event(&key(Key::Space, KeyState::Pressed));
        input.apply_event(&key(Key::Shift, KeyState::Pressed));

        input.apply_event(&InputEvent::Focused(false));
        assert!(input.keys_down.is_empty());
        assert!(!input.key_down(Key::Space));
        assert!(!input.key_down(Key::Shift));
    }
}

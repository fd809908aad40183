//! Live keyboard state

use std::collections::HashMap;

/// Key identifier that moves the player paddle up
pub const KEY_UP: &str = "ArrowUp";
/// Key identifier that moves the player paddle down
pub const KEY_DOWN: &str = "ArrowDown";

/// Pressed/released state per platform key identifier.
///
/// Written by input events, read during the frame tick. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, down: bool) {
        self.pressed.insert(key.to_owned(), down);
    }

    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

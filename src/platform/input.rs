//! Input merging
//!
//! Keyboard, mouse and touch all drive the same single button. Each source
//! keeps its own held state so releasing the mouse while a key is still down
//! does not drop the press.

use serde::{Deserialize, Serialize};

/// A physical input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Keyboard,
    Mouse,
    Touch,
}

/// Key codes (DOM `KeyboardEvent.code` names) that count as the button
pub fn is_jump_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}

/// Held state of every source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    keyboard: bool,
    mouse: bool,
    touch: bool,
}

impl InputState {
    /// Update one source and return the merged button state
    pub fn set(&mut self, source: InputSource, down: bool) -> bool {
        match source {
            InputSource::Keyboard => self.keyboard = down,
            InputSource::Mouse => self.mouse = down,
            InputSource::Touch => self.touch = down,
        }
        self.pressed()
    }

    /// Logical button: any source held
    pub fn pressed(&self) -> bool {
        self.keyboard || self.mouse || self.touch
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-frame input deltas.
///
/// [`InputState`](super::InputState) answers "is it down right now";
/// `InputFrame` answers "what changed since the last frame". Cleared by the
/// runtime after each `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame (repeats excluded).
    pub keys_pressed: HashSet<Key>,

    /// Keys that went up this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons that went down this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons that went up this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated pointer motion this frame, logical pixels.
    pub pointer_delta: (f32, f32),

    /// Accumulated vertical scroll this frame, in lines.
    pub scroll_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.pointer_delta = (0.0, 0.0);
        self.scroll_lines = 0.0;
    }
}

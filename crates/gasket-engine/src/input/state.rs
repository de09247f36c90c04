use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and the pointer position; per-frame
/// transitions are recorded into an [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels, `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies one event to the state, writing deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Clear "down" sets on focus loss so keys and buttons do
                    // not stick when release events go to another window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                if let Some((px, py)) = self.pointer_pos {
                    frame.pointer_delta.0 += x - px;
                    frame.pointer_delta.1 += y - py;
                }
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(key);
                    if inserted && !repeat {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(button) {
                            frame.buttons_pressed.insert(button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(&button) {
                            frame.buttons_released.insert(button);
                        }
                    }
                }
            }

            InputEvent::Scroll(lines) => {
                frame.scroll_lines += lines;
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    #[test]
    fn key_transitions_land_in_frame_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q));
        state.apply_event(&mut frame, press(Key::Q)); // held, no new edge

        assert!(state.key_down(Key::Q));
        assert_eq!(frame.keys_pressed.len(), 1);

        state.apply_event(&mut frame, release(Key::Q));
        assert!(!state.key_down(Key::Q));
        assert!(frame.keys_released.contains(&Key::Q));
    }

    #[test]
    fn repeats_do_not_count_as_presses() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::Q, state: KeyState::Pressed, repeat: true },
        );
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn pointer_delta_accumulates_across_moves() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        // First move establishes the position; no delta yet.
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 10.0 }));
        assert_eq!(frame.pointer_delta, (0.0, 0.0));

        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 14.0, y: 7.0 }));
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 15.0, y: 7.0 }));
        assert_eq!(frame.pointer_delta, (5.0, -3.0));
    }

    #[test]
    fn focus_loss_clears_held_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q));
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 0.0,
                y: 0.0,
            }),
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
    }
}

//! Input subsystem.
//!
//! The public API is platform-agnostic; the window runtime translates winit
//! events into [`InputEvent`]s and feeds them through [`InputState`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

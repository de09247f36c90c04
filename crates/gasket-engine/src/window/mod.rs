//! Window + runtime loop.
//!
//! Owns the winit `EventLoop` and the single application window, and wires
//! them to the GPU and input layers.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

//! 2D geometry for menu layout and renderer viewports.
//!
//! Canonical CPU space is logical pixels, origin top-left, +Y down; the
//! overlay shaders convert to NDC with a viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

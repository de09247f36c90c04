//! Color model shared by the overlay renderers.

mod color;

pub use color::Color;

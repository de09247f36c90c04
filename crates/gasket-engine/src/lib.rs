//! Gasket engine crate.
//!
//! Platform + GPU runtime for the gasket viewer: winit window loop, wgpu
//! device/surface management, a platform-agnostic input model, frame timing,
//! logger bootstrap, and the renderers the viewer composes (3D mesh, 2D
//! panels, glyph text).

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;

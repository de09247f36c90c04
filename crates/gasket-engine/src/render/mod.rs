//! GPU renderers.
//!
//! Each renderer owns its pipeline and buffers, created lazily on first use
//! against the active surface format.
//!
//! Conventions:
//! - the mesh renderer works in world space through an MVP uniform and
//!   writes depth;
//! - the overlay renderers (panel, text) work in logical pixels, top-left
//!   origin, converted to NDC by a viewport uniform, and blend over the
//!   scene without depth.

mod common;
mod ctx;
mod mesh;
mod panel;
mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use panel::{Panel, PanelRenderer};
pub use text::{TextRenderer, TextSpan};

//! Subdivision engine for the Sierpinski tetrahedron ("gasket") viewer.
//!
//! This crate holds the CPU side of the demo and nothing else: it knows how
//! to turn a subdivision level into a flat vertex/color buffer, and when a
//! new buffer is needed. It has no window or GPU dependencies so everything
//! here runs headless under `cargo test`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tetra`] | base tetrahedron vertices, face/color table |
//! | [`generator`] | `GasketGenerator`, `GasketBuffer` |
//! | [`session`] | `RenderSession`, `GenerateMesh`, `MeshSink` |
//!
//! # Quick start
//!
//! ```rust
//! use gasket_core::GasketGenerator;
//!
//! let buffer = GasketGenerator::new().generate(1);
//! assert_eq!(buffer.vertex_count(), 48); // 12 × 4¹
//! ```

pub mod generator;
pub mod session;
pub mod tetra;

pub use generator::{vertex_count_for, GasketBuffer, GasketGenerator};
pub use session::{GenerateMesh, MeshSink, RenderSession};

/// Subdivision depth. Unsigned by construction, so a "negative level" is
/// unrepresentable at this API.
pub type SubdivisionLevel = u32;

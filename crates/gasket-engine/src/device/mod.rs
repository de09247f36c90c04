//! GPU device + surface management.
//!
//! Creates the wgpu instance/adapter/device/queue, configures the surface,
//! owns the depth buffer, and hands out per-frame encoders/views.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction, DEPTH_FORMAT};

//! GPU resource ownership: the wgpu device/queue/surface context and
//! per-mesh vertex/index buffers.

/// Vertex layout and uploaded mesh buffers.
pub mod mesh_buffers;
/// Core wgpu context: device, queue, surface, configuration.
pub mod render_context;

pub use mesh_buffers::{GpuMesh, Vertex};
pub use render_context::{RenderContext, RenderContextError};

//! Crate-level error types.

use std::fmt;

use crate::camera::CameraError;
use crate::gpu::render_context::RenderContextError;
use crate::mesh::MeshError;

/// Errors produced by the meshview crate.
#[derive(Debug)]
pub enum MeshviewError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Camera or framing validation failure.
    Camera(CameraError),
    /// Mesh loading or construction failure.
    Mesh(MeshError),
    /// Swapchain acquisition failure during rendering.
    Surface(wgpu::SurfaceError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for MeshviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Camera(e) => write!(f, "camera error: {e}"),
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
            Self::Surface(e) => write!(f, "surface error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for MeshviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Camera(e) => Some(e),
            Self::Mesh(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for MeshviewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<CameraError> for MeshviewError {
    fn from(e: CameraError) -> Self {
        Self::Camera(e)
    }
}

impl From<MeshError> for MeshviewError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}

impl From<wgpu::SurfaceError> for MeshviewError {
    fn from(e: wgpu::SurfaceError) -> Self {
        Self::Surface(e)
    }
}

impl From<std::io::Error> for MeshviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

//! Arcball orbit camera and model auto-framing.
//!
//! Everything in this module is pure math and state: no GPU handles, no
//! window types. The viewer layer feeds in press/drag gestures and a
//! bounding box; the renderer reads back the two matrices each frame.

/// Quaternion arcball camera: gesture protocol and matrix construction.
pub mod arcball;
/// Bounding-box-driven framing (center + radius).
pub mod framing;
/// Per-frame GPU uniform record (two column-major matrices).
pub mod uniform;

pub use arcball::ArcballCamera;
pub use framing::{Aabb, Framing};
pub use uniform::CameraUniform;

use std::fmt;

/// Validation errors at the camera's public boundary.
///
/// These are all local failures with nothing transient to retry; the
/// caller decides whether to abort display or fall back to a default
/// framing. No variant leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    /// Framing radius was zero, negative, or non-finite.
    InvalidFraming {
        /// The rejected radius.
        radius: f32,
    },
    /// Bounding box had a negative axis extent or zero extent on all axes.
    DegenerateBounds,
    /// Projection aspect ratio was zero, negative, or non-finite.
    InvalidAspectRatio {
        /// The rejected aspect ratio.
        aspect: f32,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFraming { radius } => {
                write!(f, "invalid framing radius: {radius}")
            }
            Self::DegenerateBounds => {
                write!(f, "degenerate bounding box (negative or zero extents)")
            }
            Self::InvalidAspectRatio { aspect } => {
                write!(f, "invalid aspect ratio: {aspect}")
            }
        }
    }
}

impl std::error::Error for CameraError {}

// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated triangle-mesh viewer built on wgpu.
//!
//! Meshview loads an OBJ file (or raw vertex/index arrays), auto-frames
//! the model from its bounding box, and orbits it with a quaternion
//! arcball camera driven by mouse drags.
//!
//! # Key entry points
//!
//! - [`engine::MeshRenderEngine`] - surface setup, mesh loading, and
//!   per-frame rendering behind one façade
//! - [`camera::ArcballCamera`] - the orbit camera (pure math, no GPU
//!   types)
//! - [`options::Options`] - runtime configuration (title, background,
//!   framing fallback)
//! - [`viewer::Viewer`] - a ready-made winit window shell (feature
//!   `viewer`)
//!
//! # Architecture
//!
//! The camera layer is plain `glam` math and never touches wgpu; the
//! renderer owns all GPU state and consumes the camera's matrices
//! through a [`camera::CameraUniform`] snapshot. Mesh loading, framing,
//! and upload are explicit ordered steps on the engine, each returning
//! `Result`.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod mesh;
pub mod options;
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::MeshRenderEngine;
pub use error::MeshviewError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;

//! Input handling: platform-agnostic event types and the processor that
//! converts raw window events into camera gesture commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{CameraCommand, InputProcessor};

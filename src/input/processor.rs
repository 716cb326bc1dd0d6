//! Converts raw window events into camera gesture commands.
//!
//! The processor owns all transient input state: the current cursor
//! position and, while the primary button is held, the press origin.
//! Drag commands carry the **cumulative** displacement from that origin
//! (not per-event deltas), with y flipped from the windowing layer's
//! down-positive convention to the camera's up-positive one.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// Gesture commands consumed by the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Primary button went down: anchor the current orientation.
    PressStart,
    /// Cursor moved while pressed: total displacement since press start,
    /// y up-positive.
    Drag {
        /// Horizontal displacement from the press origin.
        dx: f32,
        /// Vertical displacement from the press origin, up-positive.
        dy: f32,
    },
}

/// Converts raw window events into [`CameraCommand`]s.
pub struct InputProcessor {
    /// Last known cursor position, window coordinates (y down). `None`
    /// until the first cursor event; a press with no known position is
    /// ignored rather than anchored at a bogus origin.
    cursor: Option<Vec2>,
    /// Press origin while the primary button is held.
    press_origin: Option<Vec2>,
}

impl InputProcessor {
    /// Create a processor in the idle (not pressed) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: None,
            press_origin: None,
        }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
                self.press_origin.map(|origin| CameraCommand::Drag {
                    dx: x - origin.x,
                    // Window y grows downward; the camera expects
                    // up-positive.
                    dy: origin.y - y,
                })
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    self.press_origin = self.cursor;
                    self.press_origin.map(|_| CameraCommand::PressStart)
                } else {
                    self.press_origin = None;
                    None
                }
            }
            InputEvent::MouseButton { .. } => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn movement_without_press_produces_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(moved(50.0, 60.0)), None);
        assert!(!input.is_dragging());
    }

    #[test]
    fn drag_reports_cumulative_displacement_y_up() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(100.0, 200.0));
        assert_eq!(
            input.handle_event(press()),
            Some(CameraCommand::PressStart)
        );

        // Cursor moves right and down; dy must come out negative (up is
        // positive).
        assert_eq!(
            input.handle_event(moved(130.0, 250.0)),
            Some(CameraCommand::Drag { dx: 30.0, dy: -50.0 })
        );
        // Cumulative from the origin, not from the previous event.
        assert_eq!(
            input.handle_event(moved(140.0, 180.0)),
            Some(CameraCommand::Drag { dx: 40.0, dy: 20.0 })
        );
    }

    #[test]
    fn release_ends_the_gesture() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press());
        let _ = input.handle_event(moved(10.0, 0.0));
        assert!(input.is_dragging());
        assert_eq!(input.handle_event(release()), None);
        assert!(!input.is_dragging());
        assert_eq!(input.handle_event(moved(90.0, 90.0)), None);
    }

    #[test]
    fn new_press_rebases_the_origin() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press());
        let _ = input.handle_event(moved(30.0, 0.0));
        let _ = input.handle_event(release());

        let _ = input.handle_event(press());
        assert_eq!(
            input.handle_event(moved(35.0, 0.0)),
            Some(CameraCommand::Drag { dx: 5.0, dy: 0.0 })
        );
    }

    #[test]
    fn press_before_any_cursor_position_is_ignored() {
        // Without a known cursor position there is no origin to anchor;
        // the gesture must not start from a default corner position.
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(press()), None);
        assert!(!input.is_dragging());
        assert_eq!(input.handle_event(moved(40.0, 40.0)), None);

        // Once a position has been seen, the next press anchors there.
        assert_eq!(
            input.handle_event(press()),
            Some(CameraCommand::PressStart)
        );
        assert_eq!(
            input.handle_event(moved(50.0, 40.0)),
            Some(CameraCommand::Drag { dx: 10.0, dy: 0.0 })
        );
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            None
        );
        assert!(!input.is_dragging());
    }
}

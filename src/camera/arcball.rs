use glam::{Mat4, Quat, Vec3};

use super::framing::{Aabb, Framing};
use super::CameraError;

/// Vertical field of view in radians.
const FOVY: f32 = std::f32::consts::FRAC_PI_3;
/// Near clipping plane distance.
const ZNEAR: f32 = 0.01;
/// Far clipping plane distance.
const ZFAR: f32 = 100.0;
/// Rotation sensitivity in radians per viewport-normalized drag unit.
const ROTATE_SENSITIVITY: f32 = 3.0;
/// Pull-back distance as a multiple of the framing radius; places the
/// whole bounding sphere in view with margin.
const PULLBACK: f32 = 1.25;
/// Drags shorter than this are treated as zero (avoids a division by a
/// near-zero magnitude when building the rotation axis).
const MIN_DRAG: f32 = 1e-6;

/// Arcball orbit camera: maps 2D press-and-drag gestures onto a rotation
/// of the displayed model, and produces the model-view and projection
/// matrices the renderer uploads each frame.
///
/// Drag deltas are **cumulative since press start** (not per-event), with
/// y measured up-positive. Each [`on_drag`](Self::on_drag) recomputes the
/// orientation from the press anchor, so duplicate or out-of-order
/// delivery of the same displacement is idempotent rather than
/// accumulating drift.
///
/// The camera holds no GPU or windowing types; exclusive access through
/// `&mut self` gives readers a fully-written state (gesture updates are a
/// handful of arithmetic steps, never suspended mid-mutation).
#[derive(Debug, Clone)]
pub struct ArcballCamera {
    /// Cumulative model orientation. Unit length at all times.
    orientation: Quat,
    /// Snapshot of `orientation` at gesture start. Identity before the
    /// first press, so a stray early drag just rotates from identity.
    press_anchor: Quat,
    framing: Framing,
    /// Viewport size in device-independent units; used only to normalize
    /// drag sensitivity and derive the aspect ratio.
    viewport: (f32, f32),
}

impl ArcballCamera {
    /// Create a camera at identity orientation with unit framing.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            press_anchor: Quat::IDENTITY,
            framing: Framing::UNIT,
            viewport: (viewport_width.max(1.0), viewport_height.max(1.0)),
        }
    }

    /// Begin a gesture: anchor the current orientation. Dragging
    /// conceptually ends at the next press; there is no release signal.
    pub fn on_press_start(&mut self) {
        self.press_anchor = self.orientation;
    }

    /// Apply the cumulative drag displacement since press start.
    ///
    /// `dx`/`dy` are in the viewport's units, `dy` up-positive (platform
    /// layers flip their native down-positive convention before calling).
    ///
    /// The rotation axis is the screen-space perpendicular of the drag
    /// direction, carried into model space by the **inverse** of the
    /// anchor orientation so the axis tracks the model's current facing
    /// rather than fixed world axes. The angle scales with displacement
    /// over the smaller viewport side, making the feel resolution
    /// independent.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        let magnitude = (dx * dx + dy * dy).sqrt();
        if magnitude < MIN_DRAG {
            return;
        }

        // Horizontal drag spins about the vertical screen axis and vice
        // versa.
        let screen_axis = Vec3::new(-dy / magnitude, dx / magnitude, 0.0);
        let axis = self.press_anchor.inverse() * screen_axis;

        let min_side = self.viewport.0.min(self.viewport.1);
        let angle = ROTATE_SENSITIVITY * magnitude / min_side;

        // Anchor-then-delta: the increment is relative to the gesture
        // start pose, not the previous frame's pose.
        let delta = Quat::from_axis_angle(axis, angle);
        self.orientation = (self.press_anchor * delta).normalize();
    }

    /// Update the viewport size. Non-positive dimensions are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        }
    }

    /// Replace the framing with an explicit center and radius.
    ///
    /// The stored framing is swapped in a single assignment; a rejected
    /// call leaves the previous framing untouched.
    ///
    /// # Errors
    ///
    /// `CameraError::InvalidFraming` if the radius is non-finite or not
    /// strictly positive.
    pub fn set_framing(
        &mut self,
        center: Vec3,
        radius: f32,
    ) -> Result<(), CameraError> {
        self.framing = Framing::new(center, radius)?;
        Ok(())
    }

    /// Derive and install framing from a model's bounding box.
    ///
    /// # Errors
    ///
    /// `CameraError::DegenerateBounds` if the box is malformed or has no
    /// spread on any axis.
    pub fn frame_bounds(&mut self, bounds: Aabb) -> Result<(), CameraError> {
        self.framing = Framing::from_bounds(bounds)?;
        Ok(())
    }

    /// The current framing.
    #[must_use]
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// The current model orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.0 / self.viewport.1
    }

    /// Model-view matrix: recenter the model at the origin, apply the
    /// orientation, then pull the camera back along -Z proportionally to
    /// the model size. Pure function of current state.
    #[must_use]
    pub fn model_view(&self) -> Mat4 {
        let center = Mat4::from_translation(-self.framing.center);
        let model = Mat4::from_quat(self.orientation);
        let view = Mat4::from_translation(Vec3::new(
            0.0,
            0.0,
            -PULLBACK * self.framing.radius,
        ));
        view * model * center
    }

    /// Right-handed perspective projection (fovy π/3, near 0.01, far 100)
    /// using wgpu's [0, 1] clip-space depth convention.
    ///
    /// # Errors
    ///
    /// `CameraError::InvalidAspectRatio` for a non-finite or non-positive
    /// aspect ratio instead of producing a degenerate matrix.
    #[allow(clippy::unused_self)]
    pub fn projection(&self, aspect: f32) -> Result<Mat4, CameraError> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(CameraError::InvalidAspectRatio { aspect });
        }
        Ok(Mat4::perspective_rh(FOVY, aspect, ZNEAR, ZFAR))
    }
}

impl Default for ArcballCamera {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

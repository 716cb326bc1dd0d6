use glam::Mat4;

use super::arcball::ArcballCamera;
use super::CameraError;

/// GPU uniform record fed to the mesh pipeline once per frame: the
/// model-view and projection matrices, column-major, matching std140
/// uniform-buffer layout. Uploaded verbatim with no other frame state.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Model local space to camera (eye) space.
    pub model_view: [[f32; 4]; 4],
    /// Camera space to clip space.
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Identity matrices; the first real values arrive on the first
    /// frame's update.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model_view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Recompute both matrices from the camera's current state.
    ///
    /// All-or-nothing: a rejected aspect ratio leaves the previous
    /// contents intact.
    ///
    /// # Errors
    ///
    /// Propagates `CameraError::InvalidAspectRatio` from the projection.
    pub fn update(
        &mut self,
        camera: &ArcballCamera,
        aspect: f32,
    ) -> Result<(), CameraError> {
        let projection = camera.projection(aspect)?;
        self.model_view = camera.model_view().to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        Ok(())
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn update_packs_column_major() {
        let mut cam = ArcballCamera::new(640.0, 480.0);
        cam.set_framing(Vec3::new(1.0, 2.0, 3.0), 4.0).unwrap();

        let mut uniform = CameraUniform::new();
        uniform.update(&cam, cam.aspect_ratio()).unwrap();

        let mv = cam.model_view();
        assert_eq!(uniform.model_view, mv.to_cols_array_2d());
        // Translation lives in the fourth column under the column-major
        // convention.
        assert_eq!(uniform.model_view[3][0], mv.w_axis.x);
        assert_eq!(uniform.model_view[3][2], mv.w_axis.z);
    }

    #[test]
    fn rejected_update_preserves_previous_contents() {
        let cam = ArcballCamera::new(640.0, 480.0);
        let mut uniform = CameraUniform::new();
        uniform.update(&cam, 4.0 / 3.0).unwrap();
        let before = uniform;

        assert!(uniform.update(&cam, 0.0).is_err());
        assert_eq!(uniform, before);
    }
}

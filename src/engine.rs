//! The render engine: owns the GPU context, camera, renderer, and the
//! currently displayed mesh, and orchestrates load / input / resize /
//! render.
//!
//! Initialization is a sequence of explicit `Result`-returning steps:
//! context, then renderer, then an optional mesh load. State never
//! re-initializes itself behind a property write.

use std::path::Path;

use crate::camera::ArcballCamera;
use crate::error::MeshviewError;
use crate::gpu::mesh_buffers::GpuMesh;
use crate::gpu::render_context::RenderContext;
use crate::input::{CameraCommand, InputEvent, InputProcessor};
use crate::mesh::MeshData;
use crate::options::Options;
use crate::renderer::MeshRenderer;

/// Ties the wgpu context, arcball camera, mesh renderer, and input
/// processing together behind one façade the windowing shell drives.
pub struct MeshRenderEngine {
    context: RenderContext,
    camera: ArcballCamera,
    renderer: MeshRenderer,
    input: InputProcessor,
    mesh: Option<GpuMesh>,
    options: Options,
}

impl MeshRenderEngine {
    /// Create an engine rendering to the given window surface. No mesh
    /// is loaded yet; the first frame clears to the background color.
    ///
    /// # Errors
    ///
    /// `MeshviewError::Gpu` if GPU context initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, MeshviewError> {
        let context = RenderContext::new(window, size).await?;
        let renderer = MeshRenderer::new(&context);
        let camera =
            ArcballCamera::new(size.0 as f32, size.1 as f32);

        Ok(Self {
            context,
            camera,
            renderer,
            input: InputProcessor::new(),
            mesh: None,
            options: Options::default(),
        })
    }

    /// Load and display an OBJ file, replacing any current mesh and
    /// reframing the camera to fit.
    ///
    /// # Errors
    ///
    /// `MeshviewError::Mesh` on load failure; the previous mesh stays
    /// displayed. A degenerate bounding box is an error unless options
    /// allow unit-framing fallback.
    pub fn load_obj_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<(), MeshviewError> {
        let mesh = MeshData::from_obj_file(path)?;
        self.install(&mesh)
    }

    /// Display a mesh built from raw vertex/triangle arrays.
    ///
    /// # Errors
    ///
    /// Same contract as [`load_obj_file`](Self::load_obj_file).
    pub fn load_raw_mesh(
        &mut self,
        positions: &[f32],
        triangles: &[u32],
    ) -> Result<(), MeshviewError> {
        let mesh = MeshData::from_raw(positions, triangles)?;
        self.install(&mesh)
    }

    /// Display an already-constructed mesh.
    ///
    /// # Errors
    ///
    /// `MeshviewError::Camera` if the bounds are degenerate and fallback
    /// framing is disabled.
    pub fn load_mesh(
        &mut self,
        mesh: &MeshData,
    ) -> Result<(), MeshviewError> {
        self.install(mesh)
    }

    /// Frame the camera on the mesh bounds, then upload and swap the
    /// mesh in. Framing must succeed before the swap.
    fn install(&mut self, mesh: &MeshData) -> Result<(), MeshviewError> {
        match self.camera.frame_bounds(mesh.bounds) {
            Ok(()) => {}
            Err(e) if self.options.fallback_to_unit_framing => {
                log::warn!("{e}; falling back to unit framing");
                self.camera
                    .set_framing(glam::Vec3::ZERO, 1.0)
                    .map_err(MeshviewError::Camera)?;
            }
            Err(e) => return Err(MeshviewError::Camera(e)),
        }
        self.mesh = Some(GpuMesh::upload(&self.context.device, mesh));
        Ok(())
    }

    /// Feed a raw input event through the processor and apply any
    /// resulting gesture to the camera. Returns `true` if the event
    /// produced a camera change (the shell uses this to request a
    /// redraw).
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(CameraCommand::PressStart) => {
                self.camera.on_press_start();
                true
            }
            Some(CameraCommand::Drag { dx, dy }) => {
                self.camera.on_drag(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Resize the surface and the camera viewport together.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.renderer.resize(&self.context);
        self.camera.set_viewport(width as f32, height as f32);
    }

    /// Render one frame: refresh the camera uniform, then draw.
    ///
    /// # Errors
    ///
    /// `MeshviewError::Surface` on swapchain loss (the shell resizes and
    /// retries), `MeshviewError::Camera` if the viewport aspect is
    /// invalid.
    pub fn render(&mut self) -> Result<(), MeshviewError> {
        self.renderer
            .update_camera(&self.context.queue, &self.camera)?;
        self.renderer.render(
            &self.context,
            self.mesh.as_ref(),
            self.options.background_color(),
        )?;
        Ok(())
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Read access to the camera (tests and embedding shells).
    #[must_use]
    pub fn camera(&self) -> &ArcballCamera {
        &self.camera
    }
}

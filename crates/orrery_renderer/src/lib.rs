//! `orrery_renderer` — GPU upload and the per-frame render driver for the
//! Orrery demo.
//!
//! # Module layout
//!
//! | Module          | Responsibility                                      |
//! |-----------------|-----------------------------------------------------|
//! | `context`       | wgpu instance/adapter/device/queue bootstrap        |
//! | `resources`     | Low-level buffer / texture allocation helpers       |
//! | `geometry`      | Interleaved `Vertex`, `GpuMesh` upload              |
//! | `camera`        | CPU `Camera` + frame/model uniform plumbing         |
//! | `pipeline`      | Bind-group layouts + compiled `LambertPipeline`     |
//! | `render_target` | Depth attachment                                    |
//! | `scene`         | `SceneObject` — placed mesh instances               |
//! | `graph`         | `RenderPass` trait + `FramePacket`                  |
//! | `passes`        | Built-in `WorldPass`                                |

pub mod camera;
pub mod context;
pub mod geometry;
pub mod graph;
pub mod passes;
pub mod pipeline;
pub mod render_target;
pub mod resources;
pub mod scene;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use glam;

pub use camera::{Camera, GpuGlobals, SceneParams};
pub use context::RenderContext;
pub use geometry::{GpuMesh, Vertex};
pub use graph::{FramePacket, RenderPass};
pub use render_target::DepthTarget;
pub use scene::SceneObject;

// ── Internal imports ──────────────────────────────────────────────────────────

use graph::frame_packet::DrawCommand;
use passes::WorldPass;
use pipeline::{LambertPipeline, PipelineLayouts};

/// Top-level render driver.
///
/// Holds the GPU context, camera, scene objects, and the ordered pass
/// list; executes the two-phase **prepare → execute** pattern each
/// frame.  Per frame it marshals camera/light/time/material values into
/// the globals uniform, assembles a [`FramePacket`], and issues one
/// indexed draw per object.
pub struct Renderer {
    pub context: RenderContext,

    // ── Frame state ───────────────────────────────────────────────────────
    pub camera: Camera,
    pub scene_params: SceneParams,
    globals: GpuGlobals,

    // ── Scene ─────────────────────────────────────────────────────────────
    objects: Vec<SceneObject>,
    layouts: PipelineLayouts,

    // ── Passes / attachments ──────────────────────────────────────────────
    passes: Vec<Box<dyn RenderPass>>,
    depth: DepthTarget,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a `Renderer` with the default world pass for the given
    /// target surface format.
    pub fn new(context: RenderContext, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        let device = &context.device;

        let layouts = PipelineLayouts::new(device);
        let pipeline = LambertPipeline::new(device, format, layouts.clone());

        let mut camera = Camera::default();
        camera.set_aspect(width as f32 / height as f32);

        let globals = GpuGlobals::new(device, &layouts.globals);
        let depth = DepthTarget::new(device, width, height);

        let world_pass = WorldPass::new(pipeline, globals.bind_group.clone());
        let passes: Vec<Box<dyn RenderPass>> = vec![Box::new(world_pass)];

        Self {
            context,
            camera,
            scene_params: SceneParams::default(),
            globals,
            objects: Vec::new(),
            layouts,
            passes,
            depth,
            width,
            height,
        }
    }

    // ── Frame API ─────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Renders one frame into `view`.
    ///
    /// `time` is seconds since start, `tick` the frame counter — both are
    /// marshaled into the globals uniform before any pass runs.
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        time: f32,
        tick: f32,
    ) {
        // 1. Upload frame globals.
        self.globals.sync(
            &self.context.queue,
            &self.camera,
            &self.scene_params,
            time,
            tick,
        );

        // 2. Assemble the frame packet (pure CPU data).
        let packet = FramePacket {
            scene_objects: self
                .objects
                .iter()
                .map(|obj| DrawCommand {
                    vertex_buffer: obj.mesh.vertex_buffer.clone(),
                    index_buffer: obj.mesh.index_buffer.clone(),
                    index_count: obj.mesh.index_count,
                    index_format: obj.mesh.index_format,
                    model_bind_group: obj.model_bind_group.clone(),
                })
                .collect(),
        };

        // 3. Execute every registered pass.
        let depth_view = &self.depth.view;
        for pass in &mut self.passes {
            pass.prepare(&self.context.device, &self.context.queue, &packet);
            pass.execute(
                &self.context.device,
                &self.context.queue,
                encoder,
                view,
                Some(depth_view),
                &packet,
            );
        }
    }

    // ── Scene management ──────────────────────────────────────────────────

    /// Uploads `mesh` and spawns an instance at `transform`; returns its
    /// stable handle index.
    pub fn add_object(
        &mut self,
        label: &str,
        mesh: &orrery_geometry::Mesh,
        transform: glam::Mat4,
    ) -> usize {
        let gpu = GpuMesh::upload(&self.context.device, label, mesh);
        log::debug!(
            "uploaded '{label}': {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_count()
        );
        self.objects
            .push(SceneObject::new(&self.context.device, gpu, transform, &self.layouts.model));
        self.objects.len() - 1
    }

    /// Re-uploads a regenerated mesh for an existing object.  The new
    /// buffers replace the old ones atomically from the caller's
    /// perspective; there is no partial-update path.
    pub fn replace_mesh(&mut self, idx: usize, label: &str, mesh: &orrery_geometry::Mesh) {
        if let Some(obj) = self.objects.get_mut(idx) {
            obj.replace_mesh(GpuMesh::upload(&self.context.device, label, mesh));
            log::debug!(
                "replaced '{label}': {} vertices, {} indices",
                mesh.vertex_count(),
                mesh.index_count()
            );
        }
    }

    /// Moves an existing object (GPU uniform write).
    pub fn set_object_transform(&mut self, idx: usize, transform: glam::Mat4) {
        if let Some(obj) = self.objects.get_mut(idx) {
            obj.set_transform(&self.context.queue, transform);
        }
    }

    /// World-space transform of an object, or `None` if out of bounds.
    pub fn object_transform(&self, idx: usize) -> Option<glam::Mat4> {
        self.objects.get(idx).map(|o| o.transform())
    }

    // ── Resize ────────────────────────────────────────────────────────────

    /// Recreates size-dependent GPU textures and fixes the camera aspect.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        self.depth
            .resize(&self.context.device, new_width, new_height);
        self.camera
            .set_aspect(new_width as f32 / new_height as f32);
        self.width = new_width;
        self.height = new_height;
    }
}

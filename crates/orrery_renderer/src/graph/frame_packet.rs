/// Data bundle assembled once per frame and passed immutably to every
/// `RenderPass`.
///
/// Building the packet on the CPU decouples scene management from the
/// passes: a pass sees fully-resolved GPU handles, not how the scene is
/// structured.
use std::sync::Arc;

/// A single mesh draw, fully resolved to GPU handles.
pub struct DrawCommand {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
    /// Per-object model uniform bind group (group 1).
    pub model_bind_group: Arc<wgpu::BindGroup>,
}

/// Everything a `RenderPass` may need for one frame.
pub struct FramePacket {
    pub scene_objects: Vec<DrawCommand>,
}

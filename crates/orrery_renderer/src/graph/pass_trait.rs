/// The `RenderPass` trait — every stage in the frame implements this.
///
/// ## Two-phase design
/// `prepare` → `execute` lets passes upload GPU data **before** opening a
/// `wgpu::RenderPass`, because `write_buffer` is not allowed while an
/// encoder is recording a render pass.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;

pub trait RenderPass: Send + Sync + 'static {
    /// Short human-readable label, used as the WGPU debug label.
    fn name(&self) -> &str;

    /// Upload GPU data.  Called **before** `execute` each frame.
    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket);

    /// Record draw commands into `encoder`.  Implementations open their
    /// own `wgpu::RenderPass` scope here.
    ///
    /// - `color_view`  — color attachment (swapchain view)
    /// - `depth_view`  — depth attachment, or `None` for passes without depth
    fn execute(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        depth_view: Option<&TextureView>,
        packet: &FramePacket,
    );
}

/// Opaque lambert geometry pass.
///
/// Clears color + depth, binds the frame globals at group 0, and emits
/// one indexed draw per `DrawCommand` in the `FramePacket` with the
/// object's model bind group at group 1.
use std::sync::Arc;

use wgpu::{
    Color, CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::LambertPipeline;

pub struct WorldPass {
    pipeline: LambertPipeline,
    globals_bind_group: Arc<wgpu::BindGroup>,
    /// Sky / clear color.
    pub clear_color: Color,
}

impl WorldPass {
    pub fn new(pipeline: LambertPipeline, globals_bind_group: Arc<wgpu::BindGroup>) -> Self {
        Self {
            pipeline,
            globals_bind_group,
            // The original demo's pale-sky clear.
            clear_color: Color {
                r: 164.0 / 255.0,
                g: 233.0 / 255.0,
                b: 1.0,
                a: 1.0,
            },
        }
    }
}

impl RenderPass for WorldPass {
    fn name(&self) -> &str {
        "World Opaque Pass"
    }

    fn prepare(&mut self, _device: &Device, _queue: &Queue, _packet: &FramePacket) {}

    fn execute(
        &mut self,
        _device: &Device,
        _queue: &Queue,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        depth_view: Option<&TextureView>,
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(self.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: depth_view.map(|v| RenderPassDepthStencilAttachment {
                view: v,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.globals_bind_group, &[]);

        for cmd in &packet.scene_objects {
            rpass.set_bind_group(1, &*cmd.model_bind_group, &[]);
            rpass.set_vertex_buffer(0, cmd.vertex_buffer.slice(..));
            rpass.set_index_buffer(cmd.index_buffer.slice(..), cmd.index_format);
            rpass.draw_indexed(0..cmd.index_count, 0, 0..1);
        }
    }
}

/// Shared `wgpu::BindGroupLayout` objects.  Creating them once and
/// handing out `Arc` clones keeps every pass and bind group on the same
/// layout objects.
use std::sync::Arc;

/// Bind-group layouts used by the built-in pipeline.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) — frame globals (one `UNIFORM` buffer at binding 0),
    /// visible to both shader stages: the vertex stage reads the
    /// view-projection, the fragment stage reads light and material.
    pub globals: Arc<wgpu::BindGroupLayout>,
    /// group(1) — per-object model matrix pair, vertex stage only.
    pub model: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = |binding: u32, visibility: wgpu::ShaderStages| {
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }
        };

        let globals = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Globals"),
                entries: &[uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            },
        ));

        let model = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Model"),
                entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
            },
        ));

        Self { globals, model }
    }
}

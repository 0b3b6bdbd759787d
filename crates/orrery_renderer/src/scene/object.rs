/// A mesh instance placed in the scene with a world-space transform.
///
/// Each object owns its model uniform buffer and group(1) bind group the
/// same way `GpuGlobals` owns the frame uniform.  The mesh handle is
/// replaceable: live re-tessellation swaps in a freshly-uploaded
/// `GpuMesh` and the old buffers drop with the old handle — the mesh
/// itself is never mutated in place.
use std::sync::Arc;

use glam::Mat4;

use crate::camera::ModelUniform;
use crate::geometry::GpuMesh;
use crate::resources::buffer;

pub struct SceneObject {
    pub mesh: GpuMesh,
    transform: Mat4,
    uniform_buffer: Arc<wgpu::Buffer>,
    pub model_bind_group: Arc<wgpu::BindGroup>,
}

impl SceneObject {
    /// Creates an object at `transform`, allocating its model uniform.
    pub fn new(
        device: &wgpu::Device,
        mesh: GpuMesh,
        transform: Mat4,
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let uniform = ModelUniform::from_matrix(transform);
        let uniform_buffer = buffer::create_uniform(device, "Model Uniform Buffer", &uniform);

        let model_bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        }));

        Self {
            mesh,
            transform,
            uniform_buffer,
            model_bind_group,
        }
    }

    /// Current world transform (CPU side only).
    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Moves the object: updates the CPU matrix and rewrites the model
    /// uniform on the GPU.
    pub fn set_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        self.transform = transform;
        buffer::update_uniform(
            queue,
            &self.uniform_buffer,
            &ModelUniform::from_matrix(transform),
        );
    }

    /// Swaps in a replacement mesh.  The bind group and transform are
    /// untouched; prior GPU buffers drop with the old handle.
    pub fn replace_mesh(&mut self, mesh: GpuMesh) {
        self.mesh = mesh;
    }
}

/// A drawable GPU mesh — vertex/index buffer pair plus the index count.
///
/// Cheaply cloneable because the buffers are `Arc`-wrapped; a second
/// handle never copies GPU memory.  Upload is a one-shot side effect:
/// there is no mutation path, a regenerated CPU mesh gets a fresh
/// `upload` and the new handle replaces the old one wholesale.
use std::sync::Arc;

use orrery_geometry::Mesh;

use crate::geometry::Vertex;
use crate::resources::buffer;

#[derive(Clone)]
pub struct GpuMesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    /// Index format used when binding this mesh.
    pub index_format: wgpu::IndexFormat,
}

impl GpuMesh {
    /// Interleaves the mesh streams and creates the GPU-resident buffers.
    ///
    /// `label` names the buffers in captures/validation messages.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices = Vertex::interleave(mesh);

        Self {
            vertex_buffer: buffer::create_vertex(device, &format!("{label} VB"), &vertices),
            index_buffer: buffer::create_index(device, &format!("{label} IB"), mesh.indices()),
            index_count: mesh.index_count(),
            index_format: wgpu::IndexFormat::Uint32,
        }
    }
}

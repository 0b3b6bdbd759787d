/// GPU vertex type shared by all built-in pipelines.
///
/// Position and normal are kept homogeneous (`w == 1` / `w == 0`) exactly
/// as the mesh streams carry them, so interleaving is a straight copy and
/// the shader can transform both with plain `mat4x4` multiplies.  The
/// matching WGSL attribute locations live in `assets/shaders/lambert.wgsl`.
use orrery_geometry::Mesh;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Homogeneous object-space position, `w == 1`.
    pub position: [f32; 4],
    /// Homogeneous object-space normal, `w == 0`.
    pub normal: [f32; 4],
}

impl Vertex {
    /// The `VertexBufferLayout` matching this struct's memory layout.
    /// Pass to `wgpu::VertexState::buffers` when building a pipeline.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 0,
                },
                // @location(1) normal
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Zips a mesh's position and normal streams into the interleaved
    /// record the vertex buffer expects.  Pure CPU work, split out from
    /// the upload path so it stays unit-testable without a device.
    pub fn interleave(mesh: &Mesh) -> Vec<Vertex> {
        mesh.positions()
            .iter()
            .zip(mesh.normals())
            .map(|(p, n)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_geometry::primitives::square;

    #[test]
    fn stride_matches_two_vec4s() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 16);
    }

    #[test]
    fn interleave_preserves_stream_alignment() {
        let mesh = square::generate(Vec3::new(1.0, 0.0, 0.0));
        let vertices = Vertex::interleave(&mesh);
        assert_eq!(vertices.len(), mesh.vertex_count());
        for (v, (p, n)) in vertices
            .iter()
            .zip(mesh.positions().iter().zip(mesh.normals()))
        {
            assert_eq!(v.position, p.to_array());
            assert_eq!(v.normal, n.to_array());
        }
    }
}

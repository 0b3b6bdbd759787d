//! Single quad in the `z = 0` plane, translated by an origin.
//!
//! Spans `[-1, 1]²` (the cube's half-extent convention); all four
//! vertices share the `+z` normal, two triangles, 6 indices.

use glam::{Vec3, Vec4};

use crate::mesh::Mesh;

/// Builds the quad around `origin`, facing `+z`.
pub fn generate(origin: Vec3) -> Mesh {
    debug_assert!(origin.is_finite());

    let o = origin;
    let p = |x: f32, y: f32| Vec4::new(o.x + x, o.y + y, o.z, 1.0);

    let positions = vec![p(-1.0, -1.0), p(1.0, -1.0), p(1.0, 1.0), p(-1.0, 1.0)];
    let normals = vec![Vec4::new(0.0, 0.0, 1.0, 0.0); 4];
    let indices = vec![0, 1, 2, 0, 2, 3];

    Mesh::new(positions, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_quad_in_the_z0_plane() {
        let mesh = generate(Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.positions().iter().all(|p| p.z == 0.0 && p.w == 1.0));
        assert!(mesh
            .normals()
            .iter()
            .all(|n| *n == Vec4::new(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn origin_translates_every_vertex() {
        let mesh = generate(Vec3::new(2.0, -1.0, 5.0));
        for p in mesh.positions() {
            assert!((p.x - 2.0).abs() <= 1.0 + 1e-6);
            assert!((p.y + 1.0).abs() <= 1.0 + 1e-6);
            assert_eq!(p.z, 5.0);
        }
    }

    #[test]
    fn triangles_face_forward() {
        let mesh = generate(Vec3::ZERO);
        for tri in mesh.indices().chunks(3) {
            let [a, b, c] = [
                mesh.positions()[tri[0] as usize].truncate(),
                mesh.positions()[tri[1] as usize].truncate(),
                mesh.positions()[tri[2] as usize].truncate(),
            ];
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }
}

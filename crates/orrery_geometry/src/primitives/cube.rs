//! Axis-aligned cube with half-extent 1, translated by an origin.
//!
//! Each of the six faces owns its four vertices (24 total) so every face
//! gets a flat, per-face-constant normal; sharing corners would average
//! the normals and shade the edges round.  Two triangles per face give
//! 36 indices, each face wound counter-clockwise seen from outside.

use glam::{Vec3, Vec4};

use crate::mesh::Mesh;

/// Builds a cube spanning `origin ± 1` on every axis.
pub fn generate(origin: Vec3) -> Mesh {
    debug_assert!(origin.is_finite());

    let o = origin;
    let p = |x: f32, y: f32, z: f32| Vec4::new(o.x + x, o.y + y, o.z + z, 1.0);
    let n = |x: f32, y: f32, z: f32| Vec4::new(x, y, z, 0.0);

    #[rustfmt::skip]
    let positions = vec![
        // front (z+)
        p(-1.0, -1.0,  1.0), p( 1.0, -1.0,  1.0), p( 1.0,  1.0,  1.0), p(-1.0,  1.0,  1.0),
        // back (z-)
        p( 1.0, -1.0, -1.0), p(-1.0, -1.0, -1.0), p(-1.0,  1.0, -1.0), p( 1.0,  1.0, -1.0),
        // right (x+)
        p( 1.0, -1.0,  1.0), p( 1.0, -1.0, -1.0), p( 1.0,  1.0, -1.0), p( 1.0,  1.0,  1.0),
        // left (x-)
        p(-1.0, -1.0, -1.0), p(-1.0, -1.0,  1.0), p(-1.0,  1.0,  1.0), p(-1.0,  1.0, -1.0),
        // bottom (y-)
        p(-1.0, -1.0, -1.0), p( 1.0, -1.0, -1.0), p( 1.0, -1.0,  1.0), p(-1.0, -1.0,  1.0),
        // top (y+)
        p(-1.0,  1.0,  1.0), p( 1.0,  1.0,  1.0), p( 1.0,  1.0, -1.0), p(-1.0,  1.0, -1.0),
    ];

    #[rustfmt::skip]
    let normals = vec![
        n(0.0, 0.0,  1.0), n(0.0, 0.0,  1.0), n(0.0, 0.0,  1.0), n(0.0, 0.0,  1.0),
        n(0.0, 0.0, -1.0), n(0.0, 0.0, -1.0), n(0.0, 0.0, -1.0), n(0.0, 0.0, -1.0),
        n( 1.0, 0.0, 0.0), n( 1.0, 0.0, 0.0), n( 1.0, 0.0, 0.0), n( 1.0, 0.0, 0.0),
        n(-1.0, 0.0, 0.0), n(-1.0, 0.0, 0.0), n(-1.0, 0.0, 0.0), n(-1.0, 0.0, 0.0),
        n(0.0, -1.0, 0.0), n(0.0, -1.0, 0.0), n(0.0, -1.0, 0.0), n(0.0, -1.0, 0.0),
        n(0.0,  1.0, 0.0), n(0.0,  1.0, 0.0), n(0.0,  1.0, 0.0), n(0.0,  1.0, 0.0),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0,  1,  2,  0,  2,  3,  // front
        4,  5,  6,  4,  6,  7,  // back
        8,  9,  10, 8,  10, 11, // right
        12, 13, 14, 12, 14, 15, // left
        16, 17, 18, 16, 18, 19, // bottom
        20, 21, 22, 20, 22, 23, // top
    ];

    Mesh::new(positions, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_dimensions() {
        let mesh = generate(Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn translated_front_face_keeps_its_flat_normal() {
        // Cube at (1,1,1): the z+ face sits at z = 2 and all four of its
        // vertices carry normal (0,0,1).
        let mesh = generate(Vec3::new(1.0, 1.0, 1.0));
        let front: Vec<usize> = (0..mesh.vertex_count())
            .filter(|&i| (mesh.positions()[i].z - 2.0).abs() < 1e-6
                && mesh.normals()[i] == Vec4::new(0.0, 0.0, 1.0, 0.0))
            .collect();
        assert_eq!(front.len(), 4);
    }

    #[test]
    fn faces_wind_outward() {
        let mesh = generate(Vec3::ZERO);
        for tri in mesh.indices().chunks(3) {
            let [a, b, c] = [
                mesh.positions()[tri[0] as usize].truncate(),
                mesh.positions()[tri[1] as usize].truncate(),
                mesh.positions()[tri[2] as usize].truncate(),
            ];
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn normals_match_vertex_normals() {
        // The geometric normal of each triangle agrees with the stored
        // per-vertex normal of its corners.
        let mesh = generate(Vec3::new(-3.0, 0.0, 2.0));
        for tri in mesh.indices().chunks(3) {
            let [a, b, c] = [
                mesh.positions()[tri[0] as usize].truncate(),
                mesh.positions()[tri[1] as usize].truncate(),
                mesh.positions()[tri[2] as usize].truncate(),
            ];
            let geometric = (b - a).cross(c - a).normalize();
            let stored = mesh.normals()[tri[0] as usize].truncate();
            assert!(geometric.distance(stored) < 1e-5);
        }
    }
}

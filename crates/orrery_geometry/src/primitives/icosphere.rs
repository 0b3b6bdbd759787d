//! Icosphere: a regular icosahedron recursively subdivided onto the unit
//! sphere, then scaled and translated into place.
//!
//! Each subdivision splits every face into four by inserting the three
//! edge midpoints, re-projected onto the sphere.  Midpoints are pooled
//! through an order-independent edge cache so a shared edge produces its
//! midpoint exactly once — skipping that dedup step tears visible seams
//! along shared edges, which makes the cache the load-bearing invariant
//! of this module.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::GeometryError;
use crate::mesh::Mesh;

/// Highest accepted subdivision level.  Level 8 already pools 655 362
/// vertices; anything beyond is a caller mistake, not a real request.
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Builds an icosphere of the given `radius` around `center`.
///
/// `subdivisions == 0` yields the raw icosahedron: 12 vertices, 20 faces,
/// 60 indices.  Every level multiplies the face count by 4.  Levels above
/// [`MAX_SUBDIVISIONS`] are rejected (not clamped), as are a non-finite
/// center and a radius that is not finite and positive.  Validation runs
/// before any allocation, so a failed call never builds a partial mesh.
///
/// The output is a pure function of the arguments: identical calls yield
/// bit-identical streams.
pub fn generate(center: Vec3, radius: f32, subdivisions: u32) -> Result<Mesh, GeometryError> {
    if !center.is_finite() {
        return Err(GeometryError::NonFiniteCenter);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if subdivisions > MAX_SUBDIVISIONS {
        return Err(GeometryError::SubdivisionsTooDeep {
            requested: subdivisions,
            max: MAX_SUBDIVISIONS,
        });
    }

    let (mut vertices, mut faces) = icosahedron();

    for _ in 0..subdivisions {
        // One cache per level: an edge of the current level is shared by
        // at most two faces, and both must receive the same pool index.
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut split = Vec::with_capacity(faces.len() * 4);

        for &[i0, i1, i2] in &faces {
            let m01 = midpoint(i0, i1, &mut vertices, &mut midpoints);
            let m12 = midpoint(i1, i2, &mut vertices, &mut midpoints);
            let m20 = midpoint(i2, i0, &mut vertices, &mut midpoints);

            split.push([i0, m01, m20]);
            split.push([i1, m12, m01]);
            split.push([i2, m20, m12]);
            split.push([m01, m12, m20]);
        }

        faces = split;
    }

    // Every pooled vertex is a unit direction; the direction doubles as
    // the smooth normal so shading is independent of radius.
    let positions = vertices
        .iter()
        .map(|dir| (center + *dir * radius).extend(1.0))
        .collect();
    let normals = vertices.iter().map(|dir| dir.extend(0.0)).collect();
    let indices = faces.iter().flatten().copied().collect();

    Ok(Mesh::new(positions, normals, indices))
}

/// Returns the pool index of the sphere-projected midpoint of edge
/// `(i, j)`, inserting it on first request.  The cache key is the sorted
/// pair, so both faces sharing the edge resolve to the same vertex no
/// matter the traversal order.
fn midpoint(
    i: u32,
    j: u32,
    vertices: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if i < j { (i, j) } else { (j, i) };
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }

    let mid = ((vertices[i as usize] + vertices[j as usize]) / 2.0).normalize();
    let idx = vertices.len() as u32;
    vertices.push(mid);
    cache.insert(key, idx);
    idx
}

/// The 12 vertices and 20 faces of a regular icosahedron inscribed in the
/// unit sphere.  Vertices are the cyclic permutations of `(±1, ±φ, 0)`,
/// normalized to unit length.
fn icosahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let inv = 1.0 / (1.0 + phi * phi).sqrt();
    let a = inv;
    let b = phi * inv;

    let vertices = vec![
        Vec3::new(-a, b, 0.0),
        Vec3::new(a, b, 0.0),
        Vec3::new(-a, -b, 0.0),
        Vec3::new(a, -b, 0.0),
        Vec3::new(0.0, -a, b),
        Vec3::new(0.0, a, b),
        Vec3::new(0.0, -a, -b),
        Vec3::new(0.0, a, -b),
        Vec3::new(b, 0.0, -a),
        Vec3::new(b, 0.0, a),
        Vec3::new(-b, 0.0, -a),
        Vec3::new(-b, 0.0, a),
    ];

    #[rustfmt::skip]
    let faces = vec![
        // 5 faces around vertex 0
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        // the adjacent ring
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        // 5 faces around vertex 3
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        // the adjacent ring
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    (vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    /// 12 vertices at level 0; each level adds one vertex per unique edge.
    /// Closed form for a subdivided icosahedron: `10 * 4^n + 2`.
    fn expected_vertices(level: u32) -> usize {
        10 * 4usize.pow(level) + 2
    }

    fn expected_indices(level: u32) -> usize {
        60 * 4usize.pow(level)
    }

    #[test]
    fn level_zero_is_the_raw_icosahedron() {
        let mesh = generate(Vec3::ZERO, 1.0, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
        assert_eq!(mesh.index_count(), 60);
        for p in mesh.positions() {
            assert!((p.truncate().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn level_one_counts() {
        let mesh = generate(Vec3::ZERO, 1.0, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.triangle_count(), 80);
        assert_eq!(mesh.index_count(), 240);
    }

    #[test]
    fn counts_follow_the_subdivision_recurrence() {
        for level in 0..=3 {
            let mesh = generate(Vec3::ZERO, 1.0, level).unwrap();
            assert_eq!(mesh.vertex_count(), expected_vertices(level), "level {level}");
            assert_eq!(mesh.index_count() as usize, expected_indices(level), "level {level}");
            assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }

    #[test]
    fn shared_edges_produce_no_duplicate_vertices() {
        // A missed cache hit would pool the same midpoint twice.  With the
        // cache working, all pooled vertices are pairwise distinct.
        let mesh = generate(Vec3::ZERO, 1.0, 2).unwrap();
        let pts = mesh.positions();
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(
                    pts[i].truncate().distance(pts[j].truncate()) > 1e-4,
                    "vertices {i} and {j} coincide"
                );
            }
        }
    }

    #[test]
    fn positions_sit_on_the_requested_sphere() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let radius = 2.5;
        let mesh = generate(center, radius, 2).unwrap();
        for p in mesh.positions() {
            assert!((p.w - 1.0).abs() < EPS);
            assert!((p.truncate().distance(center) - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn normals_are_unit_and_radial() {
        let center = Vec3::new(-2.0, 0.5, 4.0);
        let mesh = generate(center, 3.0, 1).unwrap();
        for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
            assert!((n.w).abs() < EPS);
            let n = n.truncate();
            assert!((n.length() - 1.0).abs() < EPS);
            let radial = (p.truncate() - center).normalize();
            assert!(n.distance(radial) < 1e-4);
        }
    }

    #[test]
    fn identical_arguments_yield_identical_meshes() {
        let a = generate(Vec3::new(0.5, -1.0, 2.0), 1.25, 3).unwrap();
        let b = generate(Vec3::new(0.5, -1.0, 2.0), 1.25, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_arguments_before_building() {
        assert_eq!(
            generate(Vec3::ZERO, 0.0, 1),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            generate(Vec3::ZERO, -2.0, 1),
            Err(GeometryError::InvalidRadius(-2.0))
        );
        assert!(matches!(
            generate(Vec3::ZERO, f32::NAN, 1),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert_eq!(
            generate(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0, 1),
            Err(GeometryError::NonFiniteCenter)
        );
        assert_eq!(
            generate(Vec3::ZERO, 1.0, MAX_SUBDIVISIONS + 1),
            Err(GeometryError::SubdivisionsTooDeep {
                requested: MAX_SUBDIVISIONS + 1,
                max: MAX_SUBDIVISIONS,
            })
        );
    }

    #[test]
    fn every_triangle_is_wound_outward() {
        // For a sphere around the origin, an outward-wound triangle has
        // its geometric normal pointing away from the center.
        let mesh = generate(Vec3::ZERO, 1.0, 1).unwrap();
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
    fn homogeneous_w_components() {
        let mesh = generate(Vec3::ZERO, 1.0, 0).unwrap();
        assert!(mesh.positions().iter().all(|p: &Vec4| p.w == 1.0));
        assert!(mesh.normals().iter().all(|n: &Vec4| n.w == 0.0));
    }
}

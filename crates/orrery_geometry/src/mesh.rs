//! Immutable triangle mesh: deduplicated vertex streams plus an index
//! stream grouping into triangles.
//!
//! Positions are homogeneous points (`w == 1`) and normals homogeneous
//! directions (`w == 0`), index-aligned with each other.  Indexing the
//! pool instead of storing three full vertices per triangle keeps shared
//! vertices shared; the icosphere generator relies on that to stay
//! seam-free across subdivided edges.

use glam::Vec4;

/// A finished mesh.  Built by exactly one factory call and read-only
/// afterwards — the renderer consumes the streams, it never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec4>,
    normals: Vec<Vec4>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Assembles a mesh from finished streams.
    ///
    /// Invariants (violations are programming-logic errors in the calling
    /// factory, so they are debug-asserted rather than returned):
    /// - `positions.len() == normals.len()`
    /// - `indices.len()` is divisible by 3
    /// - every index is `< positions.len()`
    pub(crate) fn new(positions: Vec<Vec4>, normals: Vec<Vec4>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Position stream — homogeneous points, `w == 1`.
    #[inline]
    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    /// Normal stream — homogeneous directions, `w == 0`, index-aligned
    /// with [`Mesh::positions`].
    #[inline]
    pub fn normals(&self) -> &[Vec4] {
        &self.normals
    }

    /// Index stream — consecutive triples form triangles.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices, as the renderer's draw-call count.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_stay_aligned() {
        let mesh = Mesh::new(
            vec![Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 1.0, 0.0, 1.0)],
            vec![Vec4::new(0.0, 0.0, 1.0, 0.0); 3],
            vec![0, 1, 2],
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.positions().len(), mesh.normals().len());
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_index_is_a_logic_error() {
        let _ = Mesh::new(
            vec![Vec4::new(0.0, 0.0, 0.0, 1.0)],
            vec![Vec4::new(0.0, 0.0, 1.0, 0.0)],
            vec![0, 0, 7],
        );
    }
}

//! Indexed triangle mesh buffers.

use nalgebra::Point3;

/// Indexed triangle mesh produced by the generation pipeline.
///
/// # Memory Layout
///
/// - `positions`: flat `[x0, y0, z0, x1, y1, z1, ...]`, one triple per
///   unique vertex, world-space millimetres centred at the origin
/// - `normals`: flat unit vectors, same length as `positions` once the
///   normal pass has run (empty before it)
/// - `indices`: vertex index triples, one per triangle
///
/// # Winding Order
///
/// Triangles wind **counter-clockwise when viewed from the void side**,
/// so normals point out of the material by the right-hand rule.
///
/// # Example
///
/// ```
/// use gyrex_types::MeshData;
///
/// let mut mesh = MeshData::new();
/// mesh.positions.extend_from_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// mesh.indices.extend_from_slice(&[0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Flat vertex positions, three floats per vertex.
    pub positions: Vec<f32>,

    /// Flat per-vertex unit normals, three floats per vertex.
    ///
    /// Empty until the normal estimation pass runs; afterwards the same
    /// length as `positions`. Degenerate vertices keep a zero normal.
    pub normals: Vec<f32>,

    /// Triangle vertex indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `triangle_count` - Expected number of triangles
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::new(),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Number of unique vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of vertex `v` as a point.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    #[inline]
    #[must_use]
    pub fn position(&self, v: usize) -> Point3<f32> {
        Point3::new(
            self.positions[v * 3],
            self.positions[v * 3 + 1],
            self.positions[v * 3 + 2],
        )
    }

    /// Overwrites the position of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    #[inline]
    pub fn set_position(&mut self, v: usize, p: Point3<f32>) {
        self.positions[v * 3] = p.x;
        self.positions[v * 3 + 1] = p.y;
        self.positions[v * 3 + 2] = p.z;
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Axis-aligned bounds of all vertices, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        for p in self.positions.chunks_exact(3) {
            min.x = min.x.min(p[0]);
            min.y = min.y.min(p[1]);
            min.z = min.z.min(p[2]);
            max.x = max.x.max(p[0]);
            max.y = max.y.max(p[1]);
            max.z = max.z.max(p[2]);
        }

        Some((min, max))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn single_triangle() -> MeshData {
        let mut mesh = MeshData::new();
        mesh.positions
            .extend_from_slice(&[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
        mesh.indices.extend_from_slice(&[0, 1, 2]);
        mesh
    }

    #[test]
    fn empty_mesh() {
        let mesh = MeshData::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn counts() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn position_roundtrip() {
        let mut mesh = single_triangle();
        let p = Point3::new(5.0, -1.0, 2.5);
        mesh.set_position(1, p);
        assert_eq!(mesh.position(1), p);
    }

    #[test]
    fn triangle_iteration() {
        let mesh = single_triangle();
        let tris: Vec<[u32; 3]> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2]]);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mesh = single_triangle();
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(2.0, 3.0, 0.0));
    }
}

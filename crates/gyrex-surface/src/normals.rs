//! Area-weighted vertex normals.

use gyrex_types::MeshData;
use nalgebra::Vector3;

/// Accumulated normals shorter than this are considered degenerate and
/// left at zero.
const MIN_NORMAL_LENGTH: f32 = 1e-8;

/// Computes per-vertex normals into `mesh.normals`.
///
/// Each triangle contributes its non-normalised cross product
/// `(b-a)×(c-a)` to its three vertices, then every accumulator is
/// normalised. Because the cross product scales with triangle area this
/// is an area-weighted average: large faces dominate, giving smooth
/// shading across coplanar clusters without letting slivers swing the
/// result. Vertices with a degenerate accumulation keep a zero normal.
pub fn compute_vertex_normals(mesh: &mut MeshData) {
    let vertex_count = mesh.vertex_count();
    let mut accumulated: Vec<Vector3<f32>> = vec![Vector3::zeros(); vertex_count];

    for tri in mesh.triangles() {
        let a = mesh.position(tri[0] as usize);
        let b = mesh.position(tri[1] as usize);
        let c = mesh.position(tri[2] as usize);

        let weighted = (b - a).cross(&(c - a));
        accumulated[tri[0] as usize] += weighted;
        accumulated[tri[1] as usize] += weighted;
        accumulated[tri[2] as usize] += weighted;
    }

    mesh.normals.clear();
    mesh.normals.reserve(vertex_count * 3);
    for n in accumulated {
        let length = n.norm();
        if length < MIN_NORMAL_LENGTH {
            mesh.normals.extend_from_slice(&[0.0, 0.0, 0.0]);
        } else {
            mesh.normals
                .extend_from_slice(&[n.x / length, n.y / length, n.z / length]);
        }
    }
}

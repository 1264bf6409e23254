//! Taubin mesh smoothing (shrink-free).
//!
//! Marching cubes on a binary field produces a stair-stepped surface.
//! Plain Laplacian smoothing would flatten the steps but also shrink the
//! mesh; Taubin's variant alternates a smoothing pass with a slightly
//! stronger inflation pass so low-frequency shrinkage cancels and the
//! result is a volume-preserving low-pass filter.
//!
//! # Reference
//!
//! Taubin, G. (1995). "A signal processing approach to fair surface
//! design", SIGGRAPH 1995.

#![allow(clippy::cast_precision_loss)]

use gyrex_types::MeshData;
use hashbrown::HashSet;
use nalgebra::Vector3;
use rayon::prelude::*;

/// Smoothing factor for the first half-step.
const LAMBDA: f32 = 0.5;

/// Inflation factor for the second half-step; slightly larger in
/// magnitude than `LAMBDA` so the pair preserves volume.
const MU: f32 = -0.53;

/// Applies `iterations` rounds of Taubin smoothing in place.
///
/// Each round performs one λ (smoothing) and one μ (inflation) step over
/// the one-ring neighbourhood of every vertex. Only positions move;
/// indices, and with them connectivity and triangle count, are untouched.
/// Vertices without neighbours stay where they are.
pub fn taubin_smooth(mesh: &mut MeshData, iterations: u32) {
    if iterations == 0 || mesh.vertex_count() == 0 || mesh.indices.is_empty() {
        return;
    }

    let neighbours = build_neighbours(mesh);

    let mut current = std::mem::take(&mut mesh.positions);
    let mut next = current.clone();

    for _ in 0..iterations {
        laplacian_step(&current, &mut next, &neighbours, LAMBDA);
        std::mem::swap(&mut current, &mut next);
        laplacian_step(&current, &mut next, &neighbours, MU);
        std::mem::swap(&mut current, &mut next);
    }

    mesh.positions = current;
}

/// One Laplacian half-step: every vertex moves toward (or away from) the
/// centroid of its one-ring by `factor`.
///
/// Pure gather from `src` into `dst`, double-buffered, so the pass
/// parallelises over disjoint vertex ranges without ordering effects.
fn laplacian_step(src: &[f32], dst: &mut [f32], neighbours: &[Vec<u32>], factor: f32) {
    dst.par_chunks_mut(3)
        .enumerate()
        .for_each(|(v, out)| {
            let ring = &neighbours[v];
            if ring.is_empty() {
                out.copy_from_slice(&src[v * 3..v * 3 + 3]);
                return;
            }

            let mut sum = Vector3::zeros();
            for &n in ring {
                let n = n as usize * 3;
                sum += Vector3::new(src[n], src[n + 1], src[n + 2]);
            }
            let centroid = sum / ring.len() as f32;

            let p = Vector3::new(src[v * 3], src[v * 3 + 1], src[v * 3 + 2]);
            let moved = p + (centroid - p) * factor;

            out[0] = moved.x;
            out[1] = moved.y;
            out[2] = moved.z;
        });
}

/// Unique one-ring neighbours per vertex, from the triangle indices.
///
/// Sorted so the gather order - and with it the floating-point rounding -
/// is identical run to run.
fn build_neighbours(mesh: &MeshData) -> Vec<Vec<u32>> {
    let mut sets: Vec<HashSet<u32>> = vec![HashSet::new(); mesh.vertex_count()];

    for tri in mesh.triangles() {
        for i in 0..3 {
            let v = tri[i] as usize;
            sets[v].insert(tri[(i + 1) % 3]);
            sets[v].insert(tri[(i + 2) % 3]);
        }
    }

    sets.into_iter()
        .map(|set| {
            let mut ring: Vec<u32> = set.into_iter().collect();
            ring.sort_unstable();
            ring
        })
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A flat n×n grid in the z=0 plane, triangulated with the usual
    /// two-triangles-per-quad split.
    fn plane_mesh(n: usize) -> MeshData {
        let mut mesh = MeshData::new();
        for y in 0..n {
            for x in 0..n {
                mesh.positions
                    .extend_from_slice(&[x as f32, y as f32, 0.0]);
            }
        }
        for y in 0..n - 1 {
            for x in 0..n - 1 {
                let i = (y * n + x) as u32;
                let n = n as u32;
                mesh.indices.extend_from_slice(&[i, i + 1, i + n]);
                mesh.indices.extend_from_slice(&[i + 1, i + n + 1, i + n]);
            }
        }
        mesh
    }

    #[test]
    fn zero_iterations_is_a_no_op() {
        let mut mesh = plane_mesh(4);
        let before = mesh.positions.clone();
        taubin_smooth(&mut mesh, 0);
        assert_eq!(mesh.positions, before);
    }

    #[test]
    fn counts_and_indices_are_preserved() {
        let mut mesh = plane_mesh(6);
        let indices_before = mesh.indices.clone();
        let vertices_before = mesh.vertex_count();

        taubin_smooth(&mut mesh, 16);

        assert_eq!(mesh.vertex_count(), vertices_before);
        assert_eq!(mesh.indices, indices_before);
    }

    #[test]
    fn flat_mesh_stays_flat() {
        let mut mesh = plane_mesh(8);
        taubin_smooth(&mut mesh, 10);

        // Neighbour centroids of a plane lie in the plane, so no pass can
        // move a vertex out of it.
        for v in 0..mesh.vertex_count() {
            assert_relative_eq!(mesh.position(v).z, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn symmetric_interior_vertex_is_a_fixed_point() {
        let mut mesh = plane_mesh(7);
        let centre = 3 * 7 + 3;
        let before = mesh.position(centre);

        taubin_smooth(&mut mesh, 5);

        // The grid split gives interior vertices a point-symmetric
        // one-ring; its centroid is the vertex itself.
        let after = mesh.position(centre);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-5);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-5);
    }

    #[test]
    fn smoothing_reduces_roughness() {
        let mut mesh = plane_mesh(9);
        // Pull alternating vertices out of plane
        for v in 0..mesh.vertex_count() {
            if v % 2 == 0 {
                let mut p = mesh.position(v);
                p.z = 0.5;
                mesh.set_position(v, p);
            }
        }

        let roughness = |m: &MeshData| -> f32 {
            (0..m.vertex_count()).map(|v| m.position(v).z.powi(2)).sum()
        };

        let before = roughness(&mesh);
        taubin_smooth(&mut mesh, 10);
        let after = roughness(&mesh);
        assert!(after < before);
    }

    #[test]
    fn isolated_vertices_do_not_move() {
        let mut mesh = plane_mesh(4);
        mesh.positions.extend_from_slice(&[99.0, 99.0, 99.0]);
        let isolated = mesh.vertex_count() - 1;

        taubin_smooth(&mut mesh, 8);

        let p = mesh.position(isolated);
        assert_relative_eq!(p.x, 99.0);
        assert_relative_eq!(p.y, 99.0);
        assert_relative_eq!(p.z, 99.0);
    }

    #[test]
    fn repeated_runs_are_bitwise_identical() {
        let make = || {
            let mut mesh = plane_mesh(10);
            for v in 0..mesh.vertex_count() {
                let mut p = mesh.position(v);
                p.z = ((v * 31) % 7) as f32 * 0.1;
                mesh.set_position(v, p);
            }
            taubin_smooth(&mut mesh, 6);
            mesh
        };

        assert_eq!(make().positions, make().positions);
    }
}

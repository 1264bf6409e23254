//! Marching cubes over the binary solid field.
//!
//! Converts solid/void samples into an indexed triangle mesh. Vertices are
//! deduplicated through three per-axis edge caches, so triangles from
//! adjacent cubes crossing the same grid edge share one vertex index and
//! the output is topologically connected rather than a triangle soup.
//!
//! Grid/mesh index conversions are inherent to the sweep and safe within
//! practical grid sizes.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use gyrex_field::SolidField;
use gyrex_types::MeshData;

use crate::tables::{CORNER_OFFSETS, EDGE_AXIS, EDGE_BASE_CORNER, EDGE_TABLE, TRI_TABLE};

/// Progress window occupied by the sweep, in percent.
const PROGRESS_START: f32 = 30.0;
const PROGRESS_END: f32 = 75.0;

/// Samples closer than this are treated as equal and split at the edge
/// midpoint.
const FLAT_EDGE_EPSILON: f64 = 1e-6;

/// Polygonises the field into an indexed triangle mesh.
///
/// The returned mesh has positions and indices; normals are left empty
/// for the normal-estimation pass. Triangles wind counter-clockwise when
/// viewed from the void side.
///
/// Vertex and triangle order are a deterministic function of the field:
/// vertices are emitted in the order grid edges are first crossed under
/// the (z, y, x, edge) sweep.
#[must_use]
pub fn extract_surface(field: &SolidField) -> MeshData {
    extract_surface_with_progress(field, &mut |_| {})
}

/// Polygonises the field, reporting progress.
///
/// `progress` receives percentages in `[30, 75]` once per completed grid
/// slab; its return value is ignored.
#[must_use]
pub fn extract_surface_with_progress(
    field: &SolidField,
    progress: &mut dyn FnMut(f32),
) -> MeshData {
    let r = field.resolution();
    let half = field.half_size_mm();
    let step = field.step_mm();

    // One cache per axis, one slot per grid point: the vertex on the edge
    // leaving that point in the positive axis direction, or -1.
    let mut caches = [
        vec![-1_i32; field.len()],
        vec![-1_i32; field.len()],
        vec![-1_i32; field.len()],
    ];

    let mut mesh = MeshData::new();
    let mut corner_idx = [0_usize; 8];

    // z-outer / y-middle / x-inner keeps the caches' working set inside
    // the current and preceding slabs.
    for z in 0..r {
        for y in 0..r {
            for x in 0..r {
                // Cube-index bit c is set iff corner c is void; solid
                // corners sample negative. Under this convention the
                // table winding faces the void.
                let mut cube_index = 0_usize;
                for (c, offset) in CORNER_OFFSETS.iter().enumerate() {
                    let gi = field.index(x + offset[0], y + offset[1], z + offset[2]);
                    corner_idx[c] = gi;
                    if field.sample(gi) > 0.0 {
                        cube_index |= 1 << c;
                    }
                }

                let edge_mask = EDGE_TABLE[cube_index];
                if edge_mask == 0 {
                    continue;
                }

                let mut edge_vertex = [0_u32; 12];
                for (e, vertex) in edge_vertex.iter_mut().enumerate() {
                    if edge_mask & (1 << e) == 0 {
                        continue;
                    }

                    let base_corner = EDGE_BASE_CORNER[e];
                    let axis = EDGE_AXIS[e];
                    let base = corner_idx[base_corner];

                    let cached = caches[axis][base];
                    if cached >= 0 {
                        *vertex = cached as u32;
                        continue;
                    }

                    let offset = CORNER_OFFSETS[base_corner];
                    let g = [x + offset[0], y + offset[1], z + offset[2]];
                    let vi = emit_edge_vertex(field, &mut mesh, base, g, axis, half, step);
                    caches[axis][base] = vi as i32;
                    *vertex = vi;
                }

                let row = &TRI_TABLE[cube_index];
                let mut k = 0;
                while row[k] >= 0 {
                    mesh.indices.push(edge_vertex[row[k] as usize]);
                    mesh.indices.push(edge_vertex[row[k + 1] as usize]);
                    mesh.indices.push(edge_vertex[row[k + 2] as usize]);
                    k += 3;
                }
            }
        }
        let frac = (z + 1) as f32 / r as f32;
        progress((PROGRESS_END - PROGRESS_START).mul_add(frac, PROGRESS_START));
    }

    mesh
}

/// Interpolates a new vertex on the grid edge leaving point `g` along
/// `axis` and appends it to the mesh.
///
/// With the binary field's ±1 samples the crossing parameter is always
/// 0.5; the interpolation formula is kept so the sweep stays sound for
/// real-valued fields.
fn emit_edge_vertex(
    field: &SolidField,
    mesh: &mut MeshData,
    base: usize,
    g: [usize; 3],
    axis: usize,
    half: f64,
    step: f64,
) -> u32 {
    let f_a = f64::from(field.sample(base));
    let f_b = f64::from(field.sample(base + field.stride(axis)));

    let mu = if (f_b - f_a).abs() < FLAT_EDGE_EPSILON {
        0.5
    } else {
        (-f_a / (f_b - f_a)).clamp(0.0, 1.0)
    };

    let mut p = [0.0_f64; 3];
    for (d, out) in p.iter_mut().enumerate() {
        let coord = if d == axis {
            g[d] as f64 + mu
        } else {
            g[d] as f64
        };
        *out = coord.mul_add(step, -half);
    }

    let vi = (mesh.positions.len() / 3) as u32;
    mesh.positions.push(p[0] as f32);
    mesh.positions.push(p[1] as f32);
    mesh.positions.push(p[2] as f32);
    vi
}

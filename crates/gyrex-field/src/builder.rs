//! Field construction.
//!
//! Classifies every grid point as solid or void by combining the gyroid
//! wall with the structural enclosure and carving port openings. The
//! numeric conversions between grid indices and millimetre coordinates are
//! fundamental to the algorithm and safe within practical grid sizes.

#![allow(clippy::cast_precision_loss)]

use std::f64::consts::PI;

use gyrex_types::{CoreParams, EnclosureMode, ParamError};
use tracing::debug;

use crate::SolidField;

/// Report progress every this many classified grid points.
const PROGRESS_EVERY: usize = 300_000;

/// Progress window occupied by field construction, in percent.
const PROGRESS_START: f32 = 5.0;
const PROGRESS_END: f32 = 28.0;

/// Snaps the requested gyroid period so a whole number of cells spans the
/// cube.
///
/// `cell_count = max(1, round(size / cell_size))`, effective period
/// `size / cell_count`. With an integral cell count the gyroid phase is
/// identical on opposite cube faces, so port openings are symmetric and
/// wall/enclosure intersections are solid.
///
/// # Examples
///
/// ```
/// use gyrex_field::snap_cell_size;
///
/// // 100mm cube, 30mm requested period: 3 cells of 33.33mm
/// let snapped = snap_cell_size(100.0, 30.0);
/// assert!((snapped - 100.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn snap_cell_size(size_mm: f64, cell_size_mm: f64) -> f64 {
    let cell_count = (size_mm / cell_size_mm).round().max(1.0);
    size_mm / cell_count
}

/// Builds the binary solid field for the given parameters.
///
/// The returned field has not had its boundary voided; call
/// [`SolidField::void_boundary`] before polygonising.
///
/// # Errors
///
/// Returns [`ParamError`] if the parameters fail validation.
pub fn build_field(params: &CoreParams) -> Result<SolidField, ParamError> {
    build_field_with_progress(params, &mut |_| {})
}

/// Builds the binary solid field, reporting progress.
///
/// `progress` receives percentages in `[5, 28]` roughly every 300k grid
/// points; its return value is ignored.
///
/// # Errors
///
/// Returns [`ParamError`] if the parameters fail validation.
pub fn build_field_with_progress(
    params: &CoreParams,
    progress: &mut dyn FnMut(f32),
) -> Result<SolidField, ParamError> {
    params.validate()?;

    let snapped = snap_cell_size(params.size_mm, params.cell_size_mm);
    if (snapped - params.cell_size_mm).abs() > 0.1 {
        debug!(
            requested_mm = params.cell_size_mm,
            snapped_mm = snapped,
            "gyroid period snapped to a whole number of cells"
        );
    }

    let r = params.resolution;
    let n = r + 1;
    let half = params.half_size();
    let step = params.step_mm();
    let tau = params.wall_threshold;

    // One set of coordinate/trig tables serves all three axes: grid
    // coordinates are identical per axis, and the gyroid argument is the
    // mm coordinate scaled by 2π over the snapped period.
    let scale = 2.0 * PI / snapped;
    let mut mm = Vec::with_capacity(n);
    let mut sin = Vec::with_capacity(n);
    let mut cos = Vec::with_capacity(n);
    for i in 0..n {
        let m = (i as f64).mul_add(step, -half);
        let rad = m * scale;
        mm.push(m);
        sin.push(rad.sin());
        cos.push(rad.cos());
    }

    let mut field = SolidField::new(r, params.size_mm, snapped);
    let total = n * n * n;
    let mut visited = 0_usize;

    for zi in 0..n {
        let z = mm[zi];
        for yi in 0..n {
            let y = mm[yi];
            for xi in 0..n {
                let x = mm[xi];

                let g = sin[xi].mul_add(cos[yi], sin[yi].mul_add(cos[zi], sin[zi] * cos[xi]));
                let wall = g.abs() <= tau;

                let structural = match params.mode {
                    EnclosureMode::Frame => {
                        frame_structural(x, y, z, half, params.frame_beam_width_mm)
                    }
                    EnclosureMode::Shell => shell_structural(
                        x,
                        y,
                        z,
                        g,
                        tau,
                        half,
                        step,
                        params.shell_thickness_mm,
                        params.seal_ports,
                    ),
                };

                if structural || wall {
                    field.set_solid(xi, yi, zi, true);
                }

                visited += 1;
                if visited % PROGRESS_EVERY == 0 {
                    let frac = visited as f32 / total as f32;
                    progress((PROGRESS_END - PROGRESS_START).mul_add(frac, PROGRESS_START));
                }
            }
        }
    }

    Ok(field)
}

/// Frame enclosure test: 12 edge beams plus 8 corner blocks.
///
/// A point is structural where it is near at least two of the three face
/// pairs, which traces the cube edges and corners while leaving all six
/// faces open.
fn frame_structural(x: f64, y: f64, z: f64, half: f64, beam_width: f64) -> bool {
    let near_x = x.abs() >= half - beam_width;
    let near_y = y.abs() >= half - beam_width;
    let near_z = z.abs() >= half - beam_width;

    (near_x && near_y) || (near_x && near_z) || (near_y && near_z)
}

/// Shell enclosure test with port carving.
///
/// The shell is everything outside the inner cube shrunk by the wall
/// thickness. Unless ports are sealed, openings are cut where a channel
/// meets its exit faces: channel A through Z±, channel B through X±. The
/// `!x_face` / `!z_face` exclusions keep each port pair single-channel,
/// and the Y edge margin keeps openings clear of the sealed Y walls.
#[allow(clippy::too_many_arguments)]
fn shell_structural(
    x: f64,
    y: f64,
    z: f64,
    g: f64,
    tau: f64,
    half: f64,
    step: f64,
    thickness: f64,
    seal_ports: bool,
) -> bool {
    let inner = half - thickness;
    let in_inner = x.abs() <= inner && y.abs() <= inner && z.abs() <= inner;
    if in_inner {
        return false;
    }

    if seal_ports {
        return true;
    }

    let face_depth = 2.0_f64.mul_add(step, thickness);
    let edge_margin = thickness + step;

    let z_face = z < -half + face_depth || z > half - face_depth;
    let x_face = x < -half + face_depth || x > half - face_depth;
    let near_y_edge = y < -half + edge_margin || y > half - edge_margin;

    let channel_a = g > tau;
    let channel_b = g < -tau;

    let open_a = z_face && !x_face && !near_y_edge && channel_a;
    let open_b = x_face && !z_face && !near_y_edge && channel_b;

    !(open_a || open_b)
}

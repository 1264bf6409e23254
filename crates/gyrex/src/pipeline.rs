//! Generation pipeline sequencing.

use gyrex_field::build_field_with_progress;
use gyrex_surface::{
    compute_vertex_normals, extract_surface_with_progress, keep_largest_component, taubin_smooth,
};
use gyrex_types::{CoreParams, EnclosureMode, MeshData};
use tracing::{debug, info};

use crate::error::GenerateError;

/// Generates the core mesh for the given parameters.
///
/// Runs the full pipeline: field construction, boundary voiding, marching
/// cubes, largest-component extraction (shell mode only), Taubin
/// smoothing, and vertex normal estimation. `progress` receives
/// percentages at the phase checkpoints 5, 28, 30, 75, 80, 90, and 100,
/// with finer-grained reports during the field and polygonisation sweeps;
/// its return value is ignored.
///
/// A field with no solid/void transitions is not an error: the returned
/// mesh simply has zero-length buffers.
///
/// # Errors
///
/// Returns [`GenerateError::Param`] if size, cell size, or resolution is
/// not strictly positive, or an enclosure parameter is out of range. No
/// partial mesh is produced on error.
///
/// # Examples
///
/// ```
/// use gyrex::{generate, CoreParams};
///
/// let params = CoreParams::frame(40.0, 6.0).with_resolution(16);
/// let mesh = generate(&params, |_| {}).unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn generate<F>(params: &CoreParams, mut progress: F) -> Result<MeshData, GenerateError>
where
    F: FnMut(f32),
{
    params.validate()?;

    info!(
        mode = %params.mode,
        size_mm = params.size_mm,
        resolution = params.resolution,
        "generating core"
    );

    progress(5.0);
    let mut field = build_field_with_progress(params, &mut progress)?;
    progress(28.0);

    field.void_boundary();
    progress(30.0);

    let mut mesh = extract_surface_with_progress(&field, &mut progress);
    progress(75.0);

    // Frame cores are legitimately multi-component (beams + gyroid), so
    // fragment removal only applies to shells.
    if params.mode == EnclosureMode::Shell {
        let discarded = keep_largest_component(&mut mesh);
        if discarded > 0 {
            debug!(discarded, "dropped disconnected fragment faces");
        }
    }
    progress(80.0);

    taubin_smooth(&mut mesh, params.smoothing_iterations);
    progress(90.0);

    compute_vertex_normals(&mut mesh);
    progress(100.0);

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        cell_size_mm = field.cell_size_mm(),
        "generation finished"
    );

    Ok(mesh)
}

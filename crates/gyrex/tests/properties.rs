//! Property-based tests for the generation pipeline.
//!
//! These tests run the full pipeline over randomly drawn parameter
//! records and verify the buffer invariants that every generation must
//! uphold, regardless of enclosure mode or resolution.

use gyrex::{encode_stl, generate, CoreParams, EnclosureMode};
use hashbrown::HashMap;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Random but valid parameter records at test-friendly resolutions.
fn arb_params() -> impl Strategy<Value = CoreParams> {
    (
        20.0..100.0_f64,      // size
        5.0..40.0_f64,        // cell size
        0.1..0.8_f64,         // wall threshold
        any::<bool>(),        // frame mode?
        0.0..5.0_f64,         // shell thickness
        4_usize..12,          // resolution
        0_u32..3,             // smoothing iterations
        any::<bool>(),        // seal ports
    )
        .prop_map(
            |(size, cell, tau, frame, thickness, resolution, smoothing, seal)| {
                let mode = if frame {
                    EnclosureMode::Frame
                } else {
                    EnclosureMode::Shell
                };
                CoreParams::new()
                    .with_size(size)
                    .with_cell_size(cell)
                    .with_wall_threshold(tau)
                    .with_mode(mode)
                    .with_shell_thickness(thickness)
                    .with_beam_width(size * 0.15)
                    .with_resolution(resolution)
                    .with_smoothing(smoothing)
                    .with_sealed_ports(seal)
            },
        )
}

// =============================================================================
// Buffer invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every index refers to an existing vertex and triangles are whole.
    #[test]
    fn indices_are_always_valid(params in arb_params()) {
        let mesh = generate(&params, |_| {}).unwrap();

        prop_assert_eq!(mesh.indices.len() % 3, 0);
        prop_assert_eq!(mesh.positions.len() % 3, 0);

        let vertex_count = mesh.vertex_count() as u32;
        for &i in &mesh.indices {
            prop_assert!(i < vertex_count);
        }
    }

    /// All vertices stay within the cube expanded by one voxel.
    #[test]
    fn positions_stay_in_the_expanded_cube(params in arb_params()) {
        let mesh = generate(&params, |_| {}).unwrap();

        let limit = (params.half_size() + params.step_mm()) as f32 + 1e-3;
        for &p in &mesh.positions {
            prop_assert!(p.abs() <= limit, "position {} beyond {}", p, limit);
        }
    }

    /// Normals always pair with positions and are unit or zero length.
    #[test]
    fn normals_are_unit_or_zero(params in arb_params()) {
        let mesh = generate(&params, |_| {}).unwrap();

        prop_assert_eq!(mesh.normals.len(), mesh.positions.len());
        for n in mesh.normals.chunks_exact(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            prop_assert!(
                length == 0.0 || (length - 1.0).abs() < 1e-4,
                "normal length {}", length
            );
        }
    }

    /// Edge deduplication: no two vertices occupy the same grid-edge
    /// position.
    #[test]
    fn vertices_are_deduplicated(params in arb_params()) {
        // Smoothing moves vertices off the lattice; compare raw geometry.
        let params = params.with_smoothing(0);
        let mesh = generate(&params, |_| {}).unwrap();

        let mut seen: HashMap<[i64; 3], usize> = HashMap::new();
        for v in 0..mesh.vertex_count() {
            let p = mesh.position(v);
            let key = [
                (f64::from(p.x) * 1e5).round() as i64,
                (f64::from(p.y) * 1e5).round() as i64,
                (f64::from(p.z) * 1e5).round() as i64,
            ];
            if let Some(&other) = seen.get(&key) {
                prop_assert!(false, "vertices {} and {} coincide", other, v);
            }
            seen.insert(key, v);
        }
    }

    /// The STL buffer is exactly header + count + 50 bytes per triangle.
    #[test]
    fn stl_length_matches_triangle_count(params in arb_params()) {
        let mesh = generate(&params, |_| {}).unwrap();
        let stl = encode_stl(&mesh);

        prop_assert_eq!(stl.len(), 84 + 50 * mesh.triangle_count());

        let count = u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]);
        prop_assert_eq!(count as usize, mesh.triangle_count());
    }

    /// Generation is a pure function of the parameters.
    #[test]
    fn repeated_generation_is_byte_identical(params in arb_params()) {
        let first = encode_stl(&generate(&params, |_| {}).unwrap());
        let second = encode_stl(&generate(&params, |_| {}).unwrap());
        prop_assert_eq!(first, second);
    }

    /// Smoothing never changes the vertex or triangle count.
    #[test]
    fn smoothing_preserves_topology(params in arb_params()) {
        let raw = generate(&params.clone().with_smoothing(0), |_| {}).unwrap();
        let smoothed = generate(&params.with_smoothing(8), |_| {}).unwrap();

        prop_assert_eq!(raw.vertex_count(), smoothed.vertex_count());
        prop_assert_eq!(raw.triangle_count(), smoothed.triangle_count());
        prop_assert_eq!(raw.indices, smoothed.indices);
    }
}

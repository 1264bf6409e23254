//! Surface extraction and mesh conditioning.
//!
//! This crate turns the binary solid field into a printable indexed
//! triangle mesh:
//!
//! - [`extract_surface`] - table-driven marching cubes with per-axis edge
//!   caches, so triangles crossing the same grid edge share one vertex
//! - [`keep_largest_component`] / [`component_count`] - triangle flood
//!   fill over shared vertices, used to drop floating fragments in shell
//!   mode
//! - [`taubin_smooth`] - two-coefficient shrink-free Laplacian smoothing
//! - [`compute_vertex_normals`] - area-weighted per-vertex normals
//!
//! All passes are pure functions of their inputs: repeated runs over the
//! same field produce identical buffers, down to the float bits.
//!
//! # Example
//!
//! ```
//! use gyrex_field::build_field;
//! use gyrex_surface::{compute_vertex_normals, extract_surface, taubin_smooth};
//! use gyrex_types::CoreParams;
//!
//! let params = CoreParams::shell(40.0, 2.0).with_resolution(16);
//! let mut field = build_field(&params).unwrap();
//! field.void_boundary();
//!
//! let mut mesh = extract_surface(&field);
//! taubin_smooth(&mut mesh, 4);
//! compute_vertex_normals(&mut mesh);
//! assert_eq!(mesh.normals.len(), mesh.positions.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod components;
mod marching;
mod normals;
mod smooth;
mod tables;

pub use components::{component_count, keep_largest_component};
pub use marching::{extract_surface, extract_surface_with_progress};
pub use normals::compute_vertex_normals;
pub use smooth::taubin_smooth;

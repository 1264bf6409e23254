//! Dual-channel gyroid heat-exchanger core generator.
//!
//! Gyrex produces a printable triangle mesh of a cubic heat-exchanger
//! core. The interior is filled by the gyroid minimal surface, whose wall
//! separates two interpenetrating flow channels; the structural boundary
//! is either a hollow shell with per-channel port openings or an open
//! edge-beam frame.
//!
//! The pipeline: parameters → binary solid field → boundary voiding →
//! marching cubes (edge-deduplicated, indexed) → largest-component
//! extraction (shell mode) → Taubin smoothing → area-weighted vertex
//! normals. The resulting [`MeshData`] can be serialised to binary STL
//! with [`encode_stl`] or [`save_stl`].
//!
//! # Quick Start
//!
//! ```
//! use gyrex::{encode_stl, generate, CoreParams};
//!
//! let params = CoreParams::shell(60.0, 3.0)
//!     .with_resolution(24)
//!     .with_smoothing(2);
//!
//! let mesh = generate(&params, |_pct| {}).unwrap();
//! let stl = encode_stl(&mesh);
//! assert_eq!(stl.len(), 84 + 50 * mesh.triangle_count());
//! ```
//!
//! # Channels and Ports
//!
//! In shell mode channel A (gyroid value above +τ) exits through the Z±
//! faces and channel B (below −τ) through the X± faces; the Y± faces are
//! sealed. In frame mode all six faces expose both channels through the
//! beam gaps. Sealing the ports (`with_sealed_ports(true)`) produces an
//! unbroken watertight outer shell.
//!
//! # Determinism
//!
//! Generation is a pure function of the parameter record: running it
//! twice yields byte-identical STL output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod pipeline;

pub use error::GenerateError;
pub use pipeline::generate;

pub use gyrex_field::{build_field, snap_cell_size, SolidField};
pub use gyrex_io::{encode_stl, save_stl, write_stl, StlError, StlResult};
pub use gyrex_surface::component_count;
pub use gyrex_types::{CoreParams, EnclosureMode, MeshData, ParamError};

//! Core types for the gyrex heat-exchanger core generator.
//!
//! This crate provides the foundational types shared by the pipeline:
//!
//! - [`CoreParams`] - The immutable parameter record driving a generation
//! - [`EnclosureMode`] - Hollow shell vs edge-beam frame enclosure
//! - [`MeshData`] - Indexed triangle mesh output buffers
//! - [`ParamError`] - Parameter validation failures
//!
//! # Units
//!
//! All lengths are millimetres. The generated core is centred at the
//! origin; coordinates span `[-size/2, +size/2]` on each axis.
//!
//! # Coordinate System
//!
//! Right-handed axes. Face winding is **counter-clockwise when viewed
//! from the void side**, so triangle normals point out of the material
//! by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use gyrex_types::{CoreParams, EnclosureMode};
//!
//! let params = CoreParams::shell(100.0, 3.0)
//!     .with_resolution(60)
//!     .with_cell_size(25.0);
//! assert_eq!(params.mode, EnclosureMode::Shell);
//! assert!(params.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mesh;
mod params;

pub use error::ParamError;
pub use mesh::MeshData;
pub use params::{CoreParams, EnclosureMode};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

//! Binary solid/void field construction.
//!
//! This crate builds the voxel field the polygoniser consumes. A field is
//! a `(R+1)³` grid of solid/void flags spanning the cube
//! `[-size/2, +size/2]³`, combining three ingredients:
//!
//! - the **gyroid wall** `|G| <= τ` of
//!   `G(x,y,z) = sin(x)cos(y) + sin(y)cos(z) + sin(z)cos(x)`, which
//!   separates the two interpenetrating flow channels;
//! - a **structural enclosure** - either a hollow shell or an edge-beam
//!   frame - fused with the wall;
//! - **port openings** carved through the shell so each channel exits the
//!   cube through its own pair of faces.
//!
//! The requested gyroid period is snapped so a whole number of cells spans
//! the cube; this keeps the gyroid phase identical on opposite faces, so
//! port openings come out symmetric and wall/enclosure intersections
//! solid.
//!
//! # Example
//!
//! ```
//! use gyrex_field::build_field;
//! use gyrex_types::CoreParams;
//!
//! let params = CoreParams::shell(60.0, 3.0).with_resolution(20);
//! let mut field = build_field(&params).unwrap();
//! field.void_boundary();
//! assert_eq!(field.points_per_axis(), 21);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod field;

pub use builder::{build_field, build_field_with_progress, snap_cell_size};
pub use field::SolidField;

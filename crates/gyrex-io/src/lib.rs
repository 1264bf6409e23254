//! Binary STL export.
//!
//! Serialises a generated mesh to the binary STL layout printers and
//! slicers expect:
//!
//! ```text
//! UINT8[80]    – Header (zeroed)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Face normal
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! The mesh is de-indexed into triangle soup on the way out; face normals
//! are recomputed from the vertex positions rather than interpolated from
//! the stored vertex normals, so the file is self-consistent even for a
//! mesh without a normal pass.
//!
//! # Example
//!
//! ```
//! use gyrex_io::encode_stl;
//! use gyrex_types::MeshData;
//!
//! let mut mesh = MeshData::new();
//! mesh.positions.extend_from_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
//! mesh.indices.extend_from_slice(&[0, 1, 2]);
//!
//! let bytes = encode_stl(&mesh);
//! assert_eq!(bytes.len(), 84 + 50);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{encode_stl, save_stl, write_stl};

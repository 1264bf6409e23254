//! Binary STL encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gyrex_types::MeshData;
use nalgebra::Vector3;

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute count).
const TRIANGLE_SIZE: usize = 50;

/// Encodes the mesh as a binary STL byte buffer.
///
/// The output is a pure function of the mesh buffers: identical meshes
/// encode to byte-identical files. The file holds exactly
/// `indices.len() / 3` triangle records and is `84 + 50 · triangles`
/// bytes long.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: triangle counts are bounded by the u32 index space
pub fn encode_stl(mesh: &MeshData) -> Vec<u8> {
    let triangle_count = mesh.triangle_count();
    let mut out = Vec::with_capacity(HEADER_SIZE + 4 + triangle_count * TRIANGLE_SIZE);

    out.extend_from_slice(&[0_u8; HEADER_SIZE]);
    out.extend_from_slice(&(triangle_count as u32).to_le_bytes());

    for tri in mesh.triangles() {
        let a = mesh.position(tri[0] as usize);
        let b = mesh.position(tri[1] as usize);
        let c = mesh.position(tri[2] as usize);

        let normal = face_normal(&(b - a), &(c - a));
        push_vector(&mut out, normal.x, normal.y, normal.z);
        push_vector(&mut out, a.x, a.y, a.z);
        push_vector(&mut out, b.x, b.y, b.z);
        push_vector(&mut out, c.x, c.y, c.z);
        out.extend_from_slice(&0_u16.to_le_bytes());
    }

    out
}

/// Writes the mesh as binary STL to any writer.
///
/// # Errors
///
/// Returns [`StlError::Io`] if the writer fails.
pub fn write_stl<W: Write>(mesh: &MeshData, writer: &mut W) -> StlResult<()> {
    writer.write_all(&encode_stl(mesh))?;
    Ok(())
}

/// Saves the mesh as a binary STL file.
///
/// # Errors
///
/// Returns [`StlError::Create`] if the file cannot be created, or
/// [`StlError::Io`] if writing fails.
///
/// # Example
///
/// ```no_run
/// use gyrex_io::save_stl;
/// use gyrex_types::MeshData;
///
/// let mesh = MeshData::new();
/// save_stl(&mesh, "core.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &MeshData, path: P) -> StlResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StlError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_stl(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Unit face normal from two triangle edges; zero for degenerate faces.
fn face_normal(e1: &Vector3<f32>, e2: &Vector3<f32>) -> Vector3<f32> {
    let normal = e1.cross(e2);
    let length = normal.norm();
    if length > f32::EPSILON {
        normal / length
    } else {
        Vector3::zeros()
    }
}

fn push_vector(out: &mut Vec<u8>, x: f32, y: f32, z: f32) {
    out.extend_from_slice(&x.to_le_bytes());
    out.extend_from_slice(&y.to_le_bytes());
    out.extend_from_slice(&z.to_le_bytes());
}

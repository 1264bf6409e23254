//! Connected-component extraction.
//!
//! Marching cubes over a noisy or porous field can leave small floating
//! fragments alongside the main body. For shell-enclosed cores everything
//! printable hangs together, so the pipeline keeps only the largest
//! connected component. Frame-enclosed cores legitimately consist of
//! several components (the beam network and the gyroid wall network), so
//! extraction is not applied there.

#![allow(clippy::cast_possible_truncation)]

use gyrex_types::MeshData;

/// Meshes below this face count are left untouched; a tiny mesh has
/// nothing worth discarding.
const MIN_FACES: usize = 100;

/// Labels each triangle with a component id.
///
/// Two triangles belong to the same component iff they are connected
/// through a chain of shared vertices. Returns the per-face labels and
/// the number of components.
fn face_components(mesh: &MeshData) -> (Vec<u32>, usize) {
    let face_count = mesh.triangle_count();
    let vertex_count = mesh.vertex_count();

    // vertex -> incident faces
    let mut vertex_faces: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
    for (f, tri) in mesh.triangles().enumerate() {
        for v in tri {
            vertex_faces[v as usize].push(f as u32);
        }
    }

    let mut labels = vec![u32::MAX; face_count];
    let mut component = 0_u32;
    let mut stack: Vec<u32> = Vec::new();

    for seed in 0..face_count {
        if labels[seed] != u32::MAX {
            continue;
        }

        labels[seed] = component;
        stack.push(seed as u32);

        while let Some(f) = stack.pop() {
            let base = f as usize * 3;
            for i in 0..3 {
                let v = mesh.indices[base + i] as usize;
                for &neighbour in &vertex_faces[v] {
                    if labels[neighbour as usize] == u32::MAX {
                        labels[neighbour as usize] = component;
                        stack.push(neighbour);
                    }
                }
            }
        }

        component += 1;
    }

    (labels, component as usize)
}

/// Number of connected components in the mesh.
///
/// # Example
///
/// ```
/// use gyrex_surface::component_count;
/// use gyrex_types::MeshData;
///
/// let mut mesh = MeshData::new();
/// mesh.positions.resize(6 * 3, 0.0);
/// mesh.indices.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
/// assert_eq!(component_count(&mesh), 2);
/// ```
#[must_use]
pub fn component_count(mesh: &MeshData) -> usize {
    if mesh.is_empty() {
        return 0;
    }
    face_components(mesh).1
}

/// Keeps only the component with the most faces.
///
/// Vertices are compacted through a remap that preserves their original
/// relative order, so repeated runs stay deterministic; triangle winding
/// is untouched. Meshes with fewer than 100 faces are left as they are.
///
/// Returns the number of faces discarded.
pub fn keep_largest_component(mesh: &mut MeshData) -> usize {
    let face_count = mesh.triangle_count();
    if face_count < MIN_FACES {
        return 0;
    }

    let (labels, components) = face_components(mesh);
    if components <= 1 {
        return 0;
    }

    // Face count per component; ties resolve to the first-seen label.
    let mut sizes = vec![0_usize; components];
    for &label in &labels {
        sizes[label as usize] += 1;
    }
    let keep = sizes
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .map_or(0, |(label, _)| label) as u32;

    // Compact surviving vertices in their original order.
    let vertex_count = mesh.vertex_count();
    let mut referenced = vec![false; vertex_count];
    for (f, tri) in mesh.triangles().enumerate() {
        if labels[f] == keep {
            for v in tri {
                referenced[v as usize] = true;
            }
        }
    }

    let mut remap = vec![u32::MAX; vertex_count];
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let has_normals = mesh.normals.len() == mesh.positions.len();
    let mut next = 0_u32;
    for (v, keep_vertex) in referenced.iter().enumerate() {
        if *keep_vertex {
            remap[v] = next;
            positions.extend_from_slice(&mesh.positions[v * 3..v * 3 + 3]);
            if has_normals {
                normals.extend_from_slice(&mesh.normals[v * 3..v * 3 + 3]);
            }
            next += 1;
        }
    }

    let mut indices = Vec::with_capacity(sizes[keep as usize] * 3);
    for (f, tri) in mesh.triangles().enumerate() {
        if labels[f] == keep {
            indices.extend_from_slice(&[
                remap[tri[0] as usize],
                remap[tri[1] as usize],
                remap[tri[2] as usize],
            ]);
        }
    }

    mesh.positions = positions;
    mesh.normals = normals;
    mesh.indices = indices;

    face_count - sizes[keep as usize]
}

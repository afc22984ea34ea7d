//! Wavefront OBJ loading into [`TriangleMesh`].

use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::mesh::TriangleMesh;

/// Errors that can occur while filling a mesh with geometry.
#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No models found in OBJ file")]
    NoModels,

    #[error("Index buffer of length {index_count} is not a whole number of triangles")]
    IncompleteTriangle { index_count: usize },

    #[error("Vertex index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Load every model in an OBJ file into `mesh`, replacing its geometry.
///
/// Faces are triangulated and the models are merged into one index buffer.
/// OBJ faces are counter-clockwise when seen from the front, so each triangle
/// is rewound to the clockwise order meshes use. The mesh transform is left
/// as is; the transform cache is stale afterwards. On error the mesh is left
/// empty.
pub fn load_obj_into(mesh: &mut TriangleMesh, path: impl AsRef<Path>) -> Result<(), MeshLoadError> {
    let path = path.as_ref();
    log::info!("Loading OBJ: {}", path.display());

    let result = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    );
    let models = match result {
        Ok((models, _materials)) => models,
        Err(err) => {
            mesh.clear_geometry();
            return Err(err.into());
        }
    };

    if models.is_empty() {
        mesh.clear_geometry();
        return Err(MeshLoadError::NoModels);
    }

    let mut positions = Vec::new();
    let mut indices = Vec::new();
    for model in &models {
        let base = positions.len() as u32;
        positions.extend(
            model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        );

        // A trailing partial triple is kept so set_geometry can reject it
        for face in model.mesh.indices.chunks(3) {
            match *face {
                [a, b, c] => indices.extend([base + a, base + c, base + b]),
                _ => indices.extend(face.iter().map(|i| base + i)),
            }
        }
    }

    mesh.set_geometry(positions, indices)?;

    log::info!(
        "Loaded {} models: {} vertices, {} triangles",
        models.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

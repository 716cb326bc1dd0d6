//! OBJ loading via `tobj`, triangulated, merged into one vertex/index set.

use std::path::Path;

use glam::Vec3;
use tobj::LoadOptions;

use super::{MeshData, MeshError};

/// Load options shared by the file and buffer paths: triangulate
/// polygonal faces and force a single index per vertex so positions and
/// normals line up one-to-one.
fn load_options() -> LoadOptions {
    LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load and merge every object in an OBJ file.
pub(crate) fn load(path: &Path) -> Result<MeshData, MeshError> {
    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    log::info!(
        "loaded {} ({} object{})",
        path.display(),
        models.len(),
        if models.len() == 1 { "" } else { "s" }
    );
    convert(models)
}

/// Merge parsed OBJ models into a single `MeshData`.
///
/// Normals are kept only when every merged object carries them;
/// otherwise they are regenerated for the whole mesh, matching the
/// original loader's add-normals-on-import behavior.
fn convert(models: Vec<tobj::Model>) -> Result<MeshData, MeshError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut all_have_normals = true;

    for model in models {
        let mesh = model.mesh;
        let base = positions.len() as u32;

        positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|c| Vec3::new(c[0], c[1], c[2])),
        );
        if mesh.normals.len() == mesh.positions.len() {
            normals.extend(
                mesh.normals
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2])),
            );
        } else {
            all_have_normals = false;
        }
        indices.extend(mesh.indices.iter().map(|&i| base + i));
    }

    let normals = if all_have_normals && normals.len() == positions.len() {
        Some(normals)
    } else {
        None
    };
    MeshData::from_parts(positions, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn parse(source: &str) -> Result<MeshData, MeshError> {
        let mut reader = BufReader::new(source.as_bytes());
        let (models, _) =
            tobj::load_obj_buf(&mut reader, &load_options(), |_| {
                Ok((Vec::new(), Default::default()))
            })?;
        convert(models)
    }

    #[test]
    fn parses_triangle_soup() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 0.0));
        // No vn lines: normals are generated, facing +Z.
        assert!((mesh.normals[0] - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn triangulates_quads() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             f 1 2 3 4\n",
        )
        .unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn merges_multiple_objects_with_offset_indices() {
        let mesh = parse(
            "o first\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n\
             o second\n\
             v 0 0 2\n\
             v 1 0 2\n\
             v 0 1 2\n\
             f 4 5 6\n",
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.indices.iter().all(|&i| i < 6));
        assert_eq!(mesh.bounds.max.z, 2.0);
    }

    #[test]
    fn empty_file_is_invalid() {
        assert!(matches!(
            parse(""),
            Err(MeshError::InvalidGeometry(_))
        ));
    }
}

//! Triangle mesh model: one abstraction over the two loading paths
//! (OBJ file, raw vertex/triangle arrays), carrying everything the GPU
//! upload needs: positions, per-vertex normals, triangle indices, and
//! the bounding box the camera frames against.

/// OBJ file loading.
pub mod obj;

use std::fmt;
use std::path::Path;

use glam::Vec3;

use crate::camera::Aabb;

/// Errors from mesh construction and loading.
#[derive(Debug)]
pub enum MeshError {
    /// OBJ parsing or file access failure.
    Load(tobj::LoadError),
    /// Input arrays describe an invalid mesh (bad counts, out-of-range
    /// indices, no geometry).
    InvalidGeometry(String),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "mesh load failed: {e}"),
            Self::InvalidGeometry(msg) => {
                write!(f, "invalid mesh geometry: {msg}")
            }
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::InvalidGeometry(_) => None,
        }
    }
}

impl From<tobj::LoadError> for MeshError {
    fn from(e: tobj::LoadError) -> Self {
        Self::Load(e)
    }
}

/// A loaded triangle mesh, CPU side.
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex unit normals, same length as `positions`.
    pub normals: Vec<Vec3>,
    /// Triangle indices, three per face.
    pub indices: Vec<u32>,
    /// Axis-aligned bounding box over `positions`.
    pub bounds: Aabb,
}

impl MeshData {
    /// Build a mesh from raw arrays: flat xyz positions and triangle
    /// indices. Normals are generated by area-weighted face averaging
    /// (the raw path carries none).
    ///
    /// # Errors
    ///
    /// `MeshError::InvalidGeometry` if the position count is not a
    /// multiple of 3, the index count is not a multiple of 3, any index
    /// is out of range, or the mesh is empty.
    pub fn from_raw(
        positions: &[f32],
        triangles: &[u32],
    ) -> Result<Self, MeshError> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::InvalidGeometry(format!(
                "position array length {} is not a multiple of 3",
                positions.len()
            )));
        }
        let positions: Vec<Vec3> = positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Self::from_parts(positions, None, triangles.to_vec())
    }

    /// Load a mesh from an OBJ file, triangulated, merging all objects in
    /// the file into a single vertex/index set.
    ///
    /// # Errors
    ///
    /// `MeshError::Load` on file or parse failure, `InvalidGeometry` if
    /// the file contains no triangles.
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> Result<Self, MeshError> {
        obj::load(path.as_ref())
    }

    /// Validate parts, generate normals if absent, compute bounds.
    pub(crate) fn from_parts(
        positions: Vec<Vec3>,
        normals: Option<Vec<Vec3>>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        if positions.is_empty() || indices.is_empty() {
            return Err(MeshError::InvalidGeometry(
                "mesh has no geometry".into(),
            ));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::InvalidGeometry(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertex_count = positions.len() as u32;
        if let Some(&bad) = indices.iter().find(|&&i| i >= vertex_count) {
            return Err(MeshError::InvalidGeometry(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }
        if let Some(ref normals) = normals {
            if normals.len() != positions.len() {
                return Err(MeshError::InvalidGeometry(format!(
                    "{} normals for {} vertices",
                    normals.len(),
                    positions.len()
                )));
            }
        }

        // from_points cannot fail here: positions is non-empty.
        let bounds = Aabb::from_points(positions.iter().copied())
            .unwrap_or(Aabb {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            });
        let normals = normals
            .unwrap_or_else(|| smooth_normals(&positions, &indices));

        Ok(Self {
            positions,
            normals,
            indices,
            bounds,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Built-in demo model shown when the viewer starts without a file: a
/// raw-array octahedron, exercising the same path as user-supplied
/// vertex/triangle data.
#[must_use]
// The arrays are statically well-formed, so construction cannot fail.
#[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
pub fn demo_mesh() -> MeshData {
    #[rustfmt::skip]
    let positions: [f32; 18] = [
         1.0,  0.0,  0.0,
        -1.0,  0.0,  0.0,
         0.0,  1.0,  0.0,
         0.0, -1.0,  0.0,
         0.0,  0.0,  1.0,
         0.0,  0.0, -1.0,
    ];
    #[rustfmt::skip]
    let triangles: [u32; 24] = [
        0, 2, 4,  2, 1, 4,  1, 3, 4,  3, 0, 4,
        2, 0, 5,  1, 2, 5,  3, 1, 5,  0, 3, 5,
    ];
    MeshData::from_raw(&positions, &triangles).unwrap()
}

/// Area-weighted smooth vertex normals: accumulate unnormalized face
/// normals onto each corner, then normalize. Degenerate faces contribute
/// nothing; isolated vertices fall back to +Z.
fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut accum = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) =
            (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a])
            .cross(positions[c] - positions[a]);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }
    accum
        .into_iter()
        .map(|n| {
            if n.length_squared() > 0.0 {
                n.normalize()
            } else {
                Vec3::Z
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_builds_bounds_and_normals() {
        // Single upward-facing triangle in the xz plane.
        let positions =
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0];
        let triangles = [0, 1, 2];
        let mesh = MeshData::from_raw(&positions, &triangles).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounds.min, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 0.0, 0.0));
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert!((*n - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn from_raw_rejects_ragged_positions() {
        let err = MeshData::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(matches!(err, Err(MeshError::InvalidGeometry(_))));
    }

    #[test]
    fn from_raw_rejects_partial_triangle() {
        let positions = [0.0; 9];
        let err = MeshData::from_raw(&positions, &[0, 1]);
        assert!(matches!(err, Err(MeshError::InvalidGeometry(_))));
    }

    #[test]
    fn from_raw_rejects_out_of_range_index() {
        let positions = [0.0; 9];
        let err = MeshData::from_raw(&positions, &[0, 1, 3]);
        assert!(matches!(err, Err(MeshError::InvalidGeometry(_))));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        assert!(matches!(
            MeshData::from_raw(&[], &[]),
            Err(MeshError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn demo_mesh_is_well_formed() {
        let mesh = demo_mesh();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.bounds.min, Vec3::splat(-1.0));
        assert_eq!(mesh.bounds.max, Vec3::splat(1.0));
        // Octahedron smooth normals point radially outward.
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((*n - p.normalize()).length() < 1e-5);
        }
    }

    #[test]
    fn smooth_normals_average_adjacent_faces() {
        // Two triangles sharing an edge, folded 90 degrees: the shared
        // vertices get the averaged normal.
        let positions = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, //
            0.0, 1.0, 0.0, //
        ];
        let triangles = [0, 1, 2, 0, 3, 1];
        let mesh = MeshData::from_raw(&positions, &triangles).unwrap();
        let shared = mesh.normals[0];
        let expected = (Vec3::Y - Vec3::Z).normalize();
        assert!((shared - expected).length() < 1e-4);
    }
}

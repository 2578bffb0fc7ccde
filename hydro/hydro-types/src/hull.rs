//! Indexed hull mesh.

use crate::{HydroError, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh describing a hull in body-local space.
///
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index. The mesh is immutable for the lifetime of a
/// simulation and is read-only input to the waterline clipper.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule. The buoyancy sum over a
/// closed hull only reduces to Archimedes' principle if this holds.
///
/// # Example
///
/// ```
/// use hydro_types::{HullMesh, Point3};
///
/// let mut hull = HullMesh::new();
/// hull.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// hull.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// hull.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// hull.faces.push([0, 1, 2]);
///
/// assert_eq!(hull.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HullMesh {
    /// Vertex positions in body-local coordinates.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl HullMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// * `positions` - Flat array `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty mesh if either slice length is not divisible by 3.
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Get the triangle for a face index.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let &[i0, i1, i2] = self.faces.get(face_index)?;
        Some(Triangle {
            v0: *self.vertices.get(i0 as usize)?,
            v1: *self.vertices.get(i1 as usize)?,
            v2: *self.vertices.get(i2 as usize)?,
        })
    }

    /// Iterate over all triangles.
    ///
    /// Faces referencing out-of-range vertices are skipped; use
    /// [`HullMesh::validate`] to reject such meshes up front.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the signed volume is the sum of signed
    /// tetrahedra volumes formed by each face and the origin. Positive for
    /// a closed mesh with outward-facing normals; not meaningful for open
    /// meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for tri in self.triangles() {
            let v0 = tri.v0.coords;
            let v1 = tri.v1.coords;
            let v2 = tri.v2.coords;

            // Signed volume of tetrahedron with origin = (v0 · (v1 × v2)) / 6
            let cross: Vector3<f64> = v1.cross(&v2);
            volume += v0.dot(&cross);
        }

        volume / 6.0
    }

    /// Check mesh consistency: at least one face, every index in range.
    ///
    /// # Errors
    ///
    /// Returns [`HydroError::EmptyHull`] for a mesh without faces and
    /// [`HydroError::FaceIndexOutOfRange`] for a dangling face index.
    pub fn validate(&self) -> crate::Result<()> {
        if self.is_empty() {
            return Err(HydroError::EmptyHull);
        }

        let count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= count {
                    return Err(HydroError::FaceIndexOutOfRange {
                        face,
                        index,
                        vertex_count: count,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Create a unit cube hull centered at the origin.
///
/// Spans (-0.5, -0.5, -0.5) to (0.5, 0.5, 0.5) with outward-facing normals,
/// so at an identity pose it floats exactly half submerged under the y = 0
/// waterline. 8 vertices, 12 triangles.
///
/// # Example
///
/// ```
/// use hydro_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// assert!((cube.surface_area() - 6.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn unit_cube() -> HullMesh {
    let h = 0.5;
    let vertices = vec![
        Point3::new(-h, -h, -h), // 0
        Point3::new(h, -h, -h),  // 1
        Point3::new(h, -h, h),   // 2
        Point3::new(-h, -h, h),  // 3
        Point3::new(-h, h, -h),  // 4
        Point3::new(h, h, -h),   // 5
        Point3::new(h, h, h),    // 6
        Point3::new(-h, h, h),   // 7
    ];

    // 2 triangles per face, CCW winding viewed from outside
    let faces = vec![
        // Bottom (y = -h), normal -Y
        [0, 1, 2],
        [0, 2, 3],
        // Top (y = +h), normal +Y
        [4, 6, 5],
        [4, 7, 6],
        // Near (z = -h), normal -Z
        [0, 4, 5],
        [0, 5, 1],
        // Far (z = +h), normal +Z
        [3, 2, 6],
        [3, 6, 7],
        // Left (x = -h), normal -X
        [0, 3, 7],
        [0, 7, 4],
        // Right (x = +h), normal +X
        [1, 6, 2],
        [1, 5, 6],
    ];

    HullMesh::from_parts(vertices, faces)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh() {
        let hull = HullMesh::new();
        assert!(hull.is_empty());
        assert!(hull.validate().is_err());
    }

    #[test]
    fn from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let hull = HullMesh::from_raw(&positions, &indices);
        assert_eq!(hull.vertex_count(), 3);
        assert_eq!(hull.face_count(), 1);
        assert!(hull.validate().is_ok());
    }

    #[test]
    fn from_raw_misaligned() {
        let hull = HullMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(hull.is_empty());
    }

    #[test]
    fn dangling_index_rejected() {
        let mut hull = HullMesh::new();
        hull.vertices.push(Point3::origin());
        hull.faces.push([0, 1, 2]);
        assert!(matches!(
            hull.validate(),
            Err(HydroError::FaceIndexOutOfRange { face: 0, .. })
        ));
    }

    #[test]
    fn unit_cube_surface_area() {
        let cube = unit_cube();
        let area = cube.surface_area();
        assert!(
            (area - 6.0).abs() < 1e-10,
            "unit cube surface area should be 6.0, got {area}"
        );
    }

    #[test]
    fn unit_cube_volume() {
        let cube = unit_cube();
        let vol = cube.signed_volume();
        assert!(
            (vol - 1.0).abs() < 1e-10,
            "unit cube volume should be 1.0, got {vol}"
        );
    }

    #[test]
    fn unit_cube_normals_point_outward() {
        let cube = unit_cube();
        for tri in cube.triangles() {
            let n = tri.normal().unwrap();
            let outward = tri.centroid().coords;
            assert!(
                n.dot(&outward) > 0.0,
                "face normal {n:?} does not point away from the center"
            );
        }
    }
}

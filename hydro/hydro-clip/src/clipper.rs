//! Waterline clipping of a hull mesh.
//!
//! Rebuilds the submerged portion of the hull every step by clipping each
//! face against the fixed waterline plane at world y = 0.

use hydro_types::{BodyKinematics, HullMesh, Point3, Pose, Triangle};
use tracing::debug;

use crate::record::{ClippedTriangle, SubmersionRecord};

/// One corner of a face while classifying it against the waterline.
///
/// `slot` is the vertex's original position within the face (0, 1, 2). It
/// survives the depth sort so the original winding can be reconstructed;
/// swapping the modulo-3 adjacency rules below silently inverts winding.
#[derive(Debug, Clone, Copy)]
struct SlotVertex {
    slot: usize,
    pos: Point3<f64>,
    depth: f64,
}

/// Clips a hull mesh against the waterline plane each step.
///
/// Owns the static body-local mesh data, per-vertex world-position and
/// signed-depth scratch buffers, and one [`SubmersionRecord`] per original
/// face. The clipped-triangle list is an arena: cleared and refilled by
/// every [`recompute`](Self::recompute), so consumers must copy out
/// anything they need before the next step.
///
/// # Example
///
/// ```
/// use hydro_types::{unit_cube, Pose};
/// use hydro_clip::WaterlineClipper;
///
/// let mut clipper = WaterlineClipper::new(&unit_cube()).unwrap();
/// clipper.recompute(&Pose::identity());
///
/// // Half the cube is under the waterline: bottom face plus half of each side
/// assert!((clipper.submerged_area() - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct WaterlineClipper {
    /// Body-local vertex positions (immutable input).
    local_vertices: Vec<Point3<f64>>,
    /// Triangle faces as vertex index triples (immutable input).
    faces: Vec<[u32; 3]>,
    /// World-space vertex positions, overwritten each step.
    world_vertices: Vec<Point3<f64>>,
    /// Signed depth per vertex: positive above the waterline, negative below.
    depths: Vec<f64>,
    /// One record per original face, persisted across steps.
    records: Vec<SubmersionRecord>,
    /// Clipped triangles of the current step.
    clipped: Vec<ClippedTriangle>,
    /// Total original surface area, fixed at construction.
    total_area: f64,
}

impl WaterlineClipper {
    /// Create a clipper for the given hull.
    ///
    /// Computes each face's original area and the hull's total surface area
    /// once; submersion records start zero-initialized (fully dry).
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no faces or references an
    /// out-of-range vertex index.
    pub fn new(hull: &HullMesh) -> hydro_types::Result<Self> {
        hull.validate()?;

        let mut records = Vec::with_capacity(hull.face_count());
        let mut total_area = 0.0;
        for tri in hull.triangles() {
            let area = tri.area();
            total_area += area;
            records.push(SubmersionRecord::new(area));
        }

        Ok(Self {
            local_vertices: hull.vertices.clone(),
            faces: hull.faces.clone(),
            world_vertices: vec![Point3::origin(); hull.vertex_count()],
            depths: vec![0.0; hull.vertex_count()],
            records,
            clipped: Vec::with_capacity(hull.face_count() * 2),
            total_area,
        })
    }

    /// Recompute the submerged triangle set for the given world transform.
    ///
    /// Per step: shifts each record's submerged-area history, transforms
    /// every vertex to world space (world Y is the signed depth), then
    /// classifies each face by the sign pattern of its vertex depths:
    ///
    /// - all above: contributes nothing, `submerged_area` = 0
    /// - all at or below: emitted unchanged, `submerged_area` = original
    ///   area (a face touching the waterline from beneath counts as wet)
    /// - straddling: split against the waterline into one or two triangles
    ///   preserving the original winding
    ///
    /// Each record's `center` is also updated to the face's pre-clip world
    /// centroid, the sample point for velocity.
    pub fn recompute(&mut self, pose: &Pose) {
        for rec in &mut self.records {
            rec.previous_submerged_area = rec.submerged_area;
        }

        for (i, local) in self.local_vertices.iter().enumerate() {
            let world = pose.transform_point(local);
            self.world_vertices[i] = world;
            self.depths[i] = world.y;
        }

        self.clipped.clear();

        for face in 0..self.faces.len() {
            let [i0, i1, i2] = self.faces[face];
            let verts = [
                self.slot_vertex(0, i0),
                self.slot_vertex(1, i1),
                self.slot_vertex(2, i2),
            ];

            // Pre-clip world centroid, sampled for velocity regardless of
            // how much of the face is submerged.
            self.records[face].center = Point3::from(
                (verts[0].pos.coords + verts[1].pos.coords + verts[2].pos.coords) / 3.0,
            );

            if verts.iter().all(|v| v.depth > 0.0) {
                self.records[face].submerged_area = 0.0;
                continue;
            }

            if verts.iter().all(|v| v.depth <= 0.0) {
                self.clipped.push(ClippedTriangle {
                    triangle: Triangle::new(verts[0].pos, verts[1].pos, verts[2].pos),
                    face,
                });
                self.records[face].submerged_area = self.records[face].original_area;
                continue;
            }

            // Straddling: order High/Mid/Low by depth, keeping slots.
            let mut sorted = verts;
            sorted.sort_by(|a, b| b.depth.total_cmp(&a.depth));

            let submerged = if sorted[0].depth > 0.0 && sorted[1].depth < 0.0 && sorted[2].depth < 0.0
            {
                self.clip_one_above(face, &sorted)
            } else if sorted[0].depth > 0.0 && sorted[1].depth > 0.0 && sorted[2].depth < 0.0 {
                self.clip_two_above(face, &sorted)
            } else {
                // A vertex sits exactly on the waterline; neither
                // strict-sign branch applies and the face contributes
                // nothing this step.
                0.0
            };
            self.records[face].submerged_area = submerged;
        }

        debug!(
            faces = self.faces.len(),
            clipped = self.clipped.len(),
            "waterline clip"
        );
    }

    /// Shift and resample per-face velocities from the body's kinematics.
    ///
    /// Call once per step, after [`recompute`](Self::recompute) so each
    /// record's `center` is current. The previous sample is retained for
    /// the slamming force's rate term.
    pub fn update_velocities(&mut self, kinematics: &BodyKinematics) {
        for rec in &mut self.records {
            rec.previous_velocity = rec.velocity;
            rec.velocity = kinematics.point_velocity(&rec.center);
        }
    }

    /// The clipped triangles of the current step.
    ///
    /// Invalidated by the next [`recompute`](Self::recompute).
    #[must_use]
    pub fn clipped(&self) -> &[ClippedTriangle] {
        &self.clipped
    }

    /// Per-face submersion records.
    #[must_use]
    pub fn records(&self) -> &[SubmersionRecord] {
        &self.records
    }

    /// Submersion record for one original face.
    #[must_use]
    pub fn record(&self, face: usize) -> Option<&SubmersionRecord> {
        self.records.get(face)
    }

    /// Number of original hull faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total original surface area of the hull.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Total submerged area this step.
    #[must_use]
    pub fn submerged_area(&self) -> f64 {
        self.records.iter().map(|r| r.submerged_area).sum()
    }

    /// Flatten the current clipped set into a world-space mesh.
    ///
    /// Intended for visualization of the submerged surface; vertices are
    /// not deduplicated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // clipped count is bounded by 2x face count
    pub fn submerged_mesh(&self) -> HullMesh {
        let mut vertices = Vec::with_capacity(self.clipped.len() * 3);
        let mut faces = Vec::with_capacity(self.clipped.len());

        for ct in &self.clipped {
            let base = vertices.len() as u32;
            vertices.extend(ct.triangle.vertices());
            faces.push([base, base + 1, base + 2]);
        }

        HullMesh::from_parts(vertices, faces)
    }

    fn slot_vertex(&self, slot: usize, index: u32) -> SlotVertex {
        SlotVertex {
            slot,
            pos: self.world_vertices[index as usize],
            depth: self.depths[index as usize],
        }
    }

    /// One vertex above water (H > 0, M < 0, L < 0): the submerged quad is
    /// emitted as two triangles.
    ///
    /// Of the two submerged vertices, the one whose slot precedes H in the
    /// original winding is M; picking the other inverts the result.
    fn clip_one_above(&mut self, face: usize, sorted: &[SlotVertex; 3]) -> f64 {
        let high = sorted[0];
        let mid_slot = (high.slot + 2) % 3;
        let (mid, low) = if sorted[1].slot == mid_slot {
            (sorted[1], sorted[2])
        } else {
            (sorted[2], sorted[1])
        };

        let cut_m = waterline_crossing(&high, &mid);
        let cut_l = waterline_crossing(&high, &low);

        let t1 = Triangle::new(mid.pos, cut_m, cut_l);
        let t2 = Triangle::new(mid.pos, cut_l, low.pos);
        let area = t1.area() + t2.area();

        self.clipped.push(ClippedTriangle { triangle: t1, face });
        self.clipped.push(ClippedTriangle { triangle: t2, face });
        area
    }

    /// Two vertices above water (H > 0, M > 0, L < 0): one submerged
    /// triangle remains.
    ///
    /// Of the two dry vertices, the one whose slot follows L in the
    /// original winding is H.
    fn clip_two_above(&mut self, face: usize, sorted: &[SlotVertex; 3]) -> f64 {
        let low = sorted[2];
        let high_slot = (low.slot + 1) % 3;
        let (high, mid) = if sorted[1].slot == high_slot {
            (sorted[1], sorted[0])
        } else {
            (sorted[0], sorted[1])
        };

        let cut_m = waterline_crossing(&mid, &low);
        let cut_h = waterline_crossing(&high, &low);

        let tri = Triangle::new(low.pos, cut_h, cut_m);
        let area = tri.area();

        self.clipped.push(ClippedTriangle { triangle: tri, face });
        area
    }
}

/// Point where the edge from `below` to `above` crosses the waterline.
///
/// `t = -depth_below / (depth_above - depth_below)` along the edge. A zero
/// depth span would divide by zero; it resolves to the submerged endpoint
/// (t = 0) instead of producing NaN, and t is clamped so accumulated float
/// error can never extrapolate past either endpoint.
fn waterline_crossing(above: &SlotVertex, below: &SlotVertex) -> Point3<f64> {
    let span = above.depth - below.depth;
    let t = if span.abs() < f64::EPSILON {
        0.0
    } else {
        (-below.depth / span).clamp(0.0, 1.0)
    };
    Point3::from(below.pos.coords + t * (above.pos.coords - below.pos.coords))
}

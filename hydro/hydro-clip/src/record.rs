//! Per-face submersion history and clipped triangle output.

use hydro_types::{Point3, Triangle, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Submersion history for one original hull face.
///
/// One record exists per original triangle for the lifetime of the owning
/// [`WaterlineClipper`](crate::WaterlineClipper); it is mutated in place
/// every step. The current/previous pairs drive the slamming force's rate
/// of submerged-volume change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubmersionRecord {
    /// Face area fixed at construction (body-local; rigid transforms
    /// preserve it).
    pub original_area: f64,
    /// Submerged area this step.
    pub submerged_area: f64,
    /// Submerged area the previous step.
    pub previous_submerged_area: f64,
    /// Body velocity sampled at the face center this step.
    pub velocity: Vector3<f64>,
    /// Sampled velocity the previous step.
    pub previous_velocity: Vector3<f64>,
    /// World-space centroid of the original (pre-clip) face.
    pub center: Point3<f64>,
}

impl SubmersionRecord {
    /// Create a zero-initialized record for a face of the given area.
    #[must_use]
    pub fn new(original_area: f64) -> Self {
        Self {
            original_area,
            submerged_area: 0.0,
            previous_submerged_area: 0.0,
            velocity: Vector3::zeros(),
            previous_velocity: Vector3::zeros(),
            center: Point3::origin(),
        }
    }

    /// Fraction of the face currently submerged, in `[0, 1]`.
    ///
    /// Returns 0 for a degenerate (zero-area) face.
    #[must_use]
    pub fn submerged_fraction(&self) -> f64 {
        if self.original_area > 0.0 {
            (self.submerged_area / self.original_area).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A triangle of the submerged hull surface, produced by clipping.
///
/// Ephemeral: the clipped set is rebuilt from scratch every step, and any
/// borrowed entries are invalidated by the next
/// [`recompute`](crate::WaterlineClipper::recompute). `face` indexes the
/// originating hull face and its [`SubmersionRecord`]; a straddling face
/// can emit two entries sharing one `face`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClippedTriangle {
    /// World-space geometry of the submerged piece.
    pub triangle: Triangle,
    /// Index of the originating hull face.
    pub face: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_starts_dry() {
        let rec = SubmersionRecord::new(2.0);
        assert_eq!(rec.submerged_area, 0.0);
        assert_eq!(rec.previous_submerged_area, 0.0);
        assert_eq!(rec.submerged_fraction(), 0.0);
    }

    #[test]
    fn submerged_fraction_clamps() {
        let mut rec = SubmersionRecord::new(2.0);
        rec.submerged_area = 1.0;
        assert!((rec.submerged_fraction() - 0.5).abs() < 1e-12);

        // Float noise above the original area stays in range
        rec.submerged_area = 2.0 + 1e-12;
        assert!(rec.submerged_fraction() <= 1.0);
    }

    #[test]
    fn degenerate_face_fraction_is_zero() {
        let rec = SubmersionRecord::new(0.0);
        assert_eq!(rec.submerged_fraction(), 0.0);
    }
}

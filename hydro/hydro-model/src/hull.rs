//! Per-step orchestration: clip, evaluate forces, hand off to the host.

use hydro_clip::{ClippedTriangle, SubmersionRecord, WaterlineClipper};
use hydro_types::{BodyKinematics, HullMesh, Point3, Pose, Vector3};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::forces;
use crate::HydroConfig;

/// A force and its world-space point of application.
///
/// One entry per submerged triangle. The host's rigid-body integrator
/// applies each as a force-at-point, contributing both net force and torque
/// about the body's center of mass; this crate performs no integration
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedForce {
    /// Force vector in world coordinates (Newtons).
    pub force: Vector3<f64>,
    /// Point of application in world coordinates.
    pub point: Point3<f64>,
}

impl AppliedForce {
    /// Torque this entry contributes about the given center of mass.
    #[must_use]
    pub fn torque_about(&self, center_of_mass: &Point3<f64>) -> Vector3<f64> {
        (self.point - center_of_mass).cross(&self.force)
    }
}

/// Hydrodynamics for one floating body.
///
/// Owns the body's [`WaterlineClipper`] and coefficient set, plus the
/// per-step output buffer (cleared and refilled each step, never
/// reallocated in steady state). One instance per simulated body; instances
/// share nothing.
///
/// # Example
///
/// ```
/// use hydro_types::{unit_cube, BodyKinematics, Pose};
/// use hydro_model::{HydroConfig, HullHydrodynamics};
///
/// let mut hydro = HullHydrodynamics::new(&unit_cube(), HydroConfig::fresh_water())?;
///
/// let pose = Pose::identity();
/// let kinematics = BodyKinematics::at_rest(100.0, 1.0 / 50.0);
/// let applied = hydro.step(&pose, &kinematics);
///
/// // At rest and half submerged only buoyancy acts, pushing up
/// let net: f64 = applied.iter().map(|a| a.force.y).sum();
/// assert!(net > 0.0);
/// # Ok::<(), hydro_types::HydroError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HullHydrodynamics {
    clipper: WaterlineClipper,
    config: HydroConfig,
    applied: Vec<AppliedForce>,
}

impl HullHydrodynamics {
    /// Create the hydrodynamics state for a hull.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid hull mesh or configuration.
    pub fn new(hull: &HullMesh, config: HydroConfig) -> hydro_types::Result<Self> {
        config.validate()?;
        let clipper = WaterlineClipper::new(hull)?;
        let capacity = clipper.face_count() * 2;

        Ok(Self {
            clipper,
            config,
            applied: Vec::with_capacity(capacity),
        })
    }

    /// Run one physics step.
    ///
    /// Clips the hull against the waterline at the given pose, refreshes
    /// per-face velocity history, then evaluates and sums buoyancy, viscous
    /// resistance, pressure drag, and slamming for every submerged
    /// triangle. Returns one force-at-point entry per submerged triangle;
    /// the slice is invalidated by the next call.
    ///
    /// Degenerate triangles and non-finite intermediate results contribute
    /// zero force; the returned forces are always finite.
    pub fn step(&mut self, pose: &Pose, kinematics: &BodyKinematics) -> &[AppliedForce] {
        self.clipper.recompute(pose);
        self.clipper.update_velocities(kinematics);

        // One skin-friction coefficient per step, from the body's speed
        // and the configured hull length.
        let cf = forces::resistance_coefficient(
            kinematics.twist.speed(),
            self.config.hull_length,
            self.config.kinematic_viscosity,
        );
        let total_area = self.clipper.total_area();

        self.applied.clear();
        for clipped in self.clipper.clipped() {
            let Some(record) = self.clipper.record(clipped.face) else {
                continue;
            };
            let entry = evaluate_triangle(
                clipped,
                record,
                kinematics,
                cf,
                total_area,
                &self.config,
            );
            trace!(
                face = clipped.face,
                force = ?entry.force,
                "triangle force"
            );
            self.applied.push(entry);
        }

        debug!(
            submerged_triangles = self.applied.len(),
            submerged_area = self.clipper.submerged_area(),
            "hydrodynamics step"
        );

        &self.applied
    }

    /// Force-at-point entries from the most recent step.
    #[must_use]
    pub fn applied_forces(&self) -> &[AppliedForce] {
        &self.applied
    }

    /// The underlying clipper (clipped set, submersion records).
    #[must_use]
    pub fn clipper(&self) -> &WaterlineClipper {
        &self.clipper
    }

    /// Current coefficient set.
    #[must_use]
    pub fn config(&self) -> &HydroConfig {
        &self.config
    }

    /// Replace the coefficient set; takes effect from the next step.
    pub fn set_config(&mut self, config: HydroConfig) -> hydro_types::Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// World-space mesh of the currently submerged surface, for
    /// visualization.
    #[must_use]
    pub fn submerged_mesh(&self) -> HullMesh {
        self.clipper.submerged_mesh()
    }
}

/// Sum the four force terms for one clipped triangle.
fn evaluate_triangle(
    clipped: &ClippedTriangle,
    record: &SubmersionRecord,
    kinematics: &BodyKinematics,
    cf: f64,
    total_area: f64,
    config: &HydroConfig,
) -> AppliedForce {
    let triangle = &clipped.triangle;
    let center = triangle.centroid();
    let point_velocity = kinematics.point_velocity(&center);

    let force = forces::buoyancy(triangle, config)
        + forces::viscous_resistance(triangle, &point_velocity, cf, config)
        + forces::pressure_drag(triangle, &point_velocity, config)
        + forces::slamming(
            triangle,
            record,
            &point_velocity,
            kinematics.mass,
            total_area,
            kinematics.dt,
            config,
        );

    AppliedForce {
        force: forces::sanitize(force),
        point: center,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hydro_types::{unit_cube, Twist};

    fn resting_kinematics() -> BodyKinematics {
        BodyKinematics::at_rest(100.0, 1.0 / 50.0)
    }

    #[test]
    fn at_rest_only_buoyancy_acts() {
        let config = HydroConfig::fresh_water();
        let mut hydro = HullHydrodynamics::new(&unit_cube(), config.clone()).unwrap();

        let applied = hydro.step(&Pose::identity(), &resting_kinematics());
        assert!(!applied.is_empty());

        // No motion: drag and slamming vanish, buoyancy is vertical.
        let net: Vector3<f64> = applied.iter().map(|a| a.force).sum();
        assert_relative_eq!(net.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(net.z, 0.0, epsilon = 1e-9);

        // Archimedes: ρ g V for half a unit cube.
        let expected = config.fluid_density * config.gravity * 0.5;
        assert_relative_eq!(net.y, expected, epsilon = 1e-6);
    }

    #[test]
    fn fully_above_water_produces_nothing() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::default()).unwrap();
        let applied = hydro.step(
            &Pose::from_position(Point3::new(0.0, 10.0, 0.0)),
            &resting_kinematics(),
        );
        assert!(applied.is_empty());
    }

    #[test]
    fn forward_motion_is_resisted() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::fresh_water()).unwrap();

        let kin = BodyKinematics::new(
            Twist::linear(Vector3::new(2.0, 0.0, 0.0)),
            Point3::origin(),
            100.0,
            1.0 / 50.0,
        );
        let applied = hydro.step(&Pose::identity(), &kin);
        let net: Vector3<f64> = applied.iter().map(|a| a.force).sum();

        assert!(net.x < 0.0, "drag should oppose forward motion, got {net:?}");
    }

    #[test]
    fn forces_applied_at_triangle_centers() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::default()).unwrap();
        hydro.step(&Pose::identity(), &resting_kinematics());

        for (applied, clipped) in hydro
            .applied_forces()
            .iter()
            .zip(hydro.clipper().clipped())
        {
            assert_relative_eq!(
                applied.point.coords,
                clipped.triangle.centroid().coords,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn symmetric_rest_pose_has_no_net_torque() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::default()).unwrap();
        let applied = hydro.step(&Pose::identity(), &resting_kinematics());

        let torque: Vector3<f64> = applied
            .iter()
            .map(|a| a.torque_about(&Point3::origin()))
            .sum();
        assert_relative_eq!(torque.norm(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn output_is_finite_under_violent_motion() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::default()).unwrap();

        let kin = BodyKinematics::new(
            Twist::new(
                Vector3::new(1e8, -1e8, 1e8),
                Vector3::new(1e6, 1e6, 1e6),
            ),
            Point3::origin(),
            1e9,
            1e-6,
        );
        let applied = hydro.step(&Pose::identity(), &kin);
        for a in applied {
            assert!(
                a.force.iter().all(|x| x.is_finite()),
                "non-finite force {:?}",
                a.force
            );
        }
    }

    #[test]
    fn buffer_reused_across_steps() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::default()).unwrap();

        let n1 = hydro.step(&Pose::identity(), &resting_kinematics()).len();
        let n2 = hydro.step(&Pose::identity(), &resting_kinematics()).len();
        assert_eq!(n1, n2);

        // Lifting the hull out empties the output without reallocation.
        let n3 = hydro
            .step(
                &Pose::from_position(Point3::new(0.0, 5.0, 0.0)),
                &resting_kinematics(),
            )
            .len();
        assert_eq!(n3, 0);
    }

    #[test]
    fn config_swap_takes_effect() {
        let mut hydro =
            HullHydrodynamics::new(&unit_cube(), HydroConfig::fresh_water()).unwrap();
        let rest = resting_kinematics();

        let net_fresh: f64 = hydro
            .step(&Pose::identity(), &rest)
            .iter()
            .map(|a| a.force.y)
            .sum();

        hydro.set_config(HydroConfig::ocean_water()).unwrap();
        let net_ocean: f64 = hydro
            .step(&Pose::identity(), &rest)
            .iter()
            .map(|a| a.force.y)
            .sum();

        assert!(net_ocean > net_fresh, "denser fluid should push harder");
    }

    #[test]
    fn invalid_config_rejected() {
        let bad = HydroConfig::default().with_fluid_density(f64::NAN);
        assert!(HullHydrodynamics::new(&unit_cube(), bad).is_err());
    }
}

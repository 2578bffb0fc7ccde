//! Rigid body state passed into the per-step computation.
//!
//! The clipper and force model never hold a reference to the host's rigid
//! body; the kinematic state they need is passed in explicitly each step.

use nalgebra::{Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and orientation of a rigid body.
///
/// # Example
///
/// ```
/// use hydro_types::Pose;
/// use nalgebra::Point3;
///
/// let pose = Pose::from_position(Point3::new(1.0, 2.0, 3.0));
/// let world = pose.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(world, Point3::new(2.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in world coordinates.
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create an identity pose (origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position only (identity rotation).
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position and rotation.
    #[must_use]
    pub const fn from_position_rotation(
        position: Point3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        Self { position, rotation }
    }

    /// Transform a point from body-local to world coordinates.
    #[must_use]
    pub fn transform_point(&self, local: &Point3<f64>) -> Point3<f64> {
        self.position + self.rotation * local.coords
    }

    /// Transform a vector from body-local to world coordinates (rotation only).
    #[must_use]
    pub fn transform_vector(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * local
    }

    /// Check if the pose contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}

/// Linear and angular velocity of a rigid body.
///
/// # Example
///
/// ```
/// use hydro_types::Twist;
/// use nalgebra::Vector3;
///
/// let twist = Twist::linear(Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(twist.linear.x, 1.0);
/// assert_eq!(twist.angular.norm(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Twist {
    /// Linear velocity in world coordinates (m/s).
    pub linear: Vector3<f64>,
    /// Angular velocity in world coordinates (rad/s).
    pub angular: Vector3<f64>,
}

impl Default for Twist {
    fn default() -> Self {
        Self::zero()
    }
}

impl Twist {
    /// Create a twist with specified linear and angular velocity.
    #[must_use]
    pub const fn new(linear: Vector3<f64>, angular: Vector3<f64>) -> Self {
        Self { linear, angular }
    }

    /// Create a zero twist (at rest).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }

    /// Create a twist with linear velocity only.
    #[must_use]
    pub fn linear(v: Vector3<f64>) -> Self {
        Self {
            linear: v,
            angular: Vector3::zeros(),
        }
    }

    /// Create a twist with angular velocity only.
    #[must_use]
    pub fn angular(omega: Vector3<f64>) -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: omega,
        }
    }

    /// Compute the velocity at a point offset from the body's center of mass.
    ///
    /// `v_point` = `v_linear` + omega × r
    #[must_use]
    pub fn velocity_at_point(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        self.linear + self.angular.cross(offset)
    }

    /// Get the linear speed (magnitude of linear velocity).
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.linear.norm()
    }

    /// Check if the twist contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.linear.iter().all(|x| x.is_finite()) && self.angular.iter().all(|x| x.is_finite())
    }
}

/// Per-step kinematic state of the simulated body.
///
/// Everything the force model needs from the host's rigid body integrator:
/// velocities, center of mass, mass, and the fixed timestep that elapsed
/// since the previous step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyKinematics {
    /// Linear and angular velocity in world coordinates.
    pub twist: Twist,
    /// Center of mass in world coordinates.
    pub center_of_mass: Point3<f64>,
    /// Total body mass (kg).
    pub mass: f64,
    /// Fixed timestep since the previous step (seconds).
    pub dt: f64,
}

impl BodyKinematics {
    /// Create a kinematic bundle.
    #[must_use]
    pub const fn new(twist: Twist, center_of_mass: Point3<f64>, mass: f64, dt: f64) -> Self {
        Self {
            twist,
            center_of_mass,
            mass,
            dt,
        }
    }

    /// A body at rest with its center of mass at the origin.
    #[must_use]
    pub fn at_rest(mass: f64, dt: f64) -> Self {
        Self {
            twist: Twist::zero(),
            center_of_mass: Point3::origin(),
            mass,
            dt,
        }
    }

    /// Velocity of a world-space point rigidly attached to the body.
    #[must_use]
    pub fn point_velocity(&self, point: &Point3<f64>) -> Vector3<f64> {
        self.twist.velocity_at_point(&(point - self.center_of_mass))
    }

    /// Validate mass and timestep.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HydroError::InvalidTimestep`] or
    /// [`crate::HydroError::InvalidMass`] for non-positive or non-finite
    /// values.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(crate::HydroError::InvalidTimestep(self.dt));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(crate::HydroError::InvalidMass(self.mass));
        }
        Ok(())
    }
}

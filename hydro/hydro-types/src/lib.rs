//! Core types for hull hydrodynamics.
//!
//! This crate provides the foundational types for simulating hydrodynamic
//! forces on a floating rigid body:
//!
//! - [`Triangle`] - A concrete triangle with area, normal, and depth
//! - [`HullMesh`] - An indexed triangle mesh in body-local space
//! - [`Pose`] / [`Twist`] / [`BodyKinematics`] - Rigid body state
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no clipping, no force model, no
//! integration. They're the common language between the waterline clipper
//! (hydro-clip), the force model (hydro-model), and whatever engine hosts
//! the rigid body.
//!
//! # Coordinate System
//!
//! Right-handed, with the waterline fixed at **world y = 0**: positive Y is
//! above water, negative Y is below. All coordinates are `f64`.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**;
//! normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use hydro_types::{unit_cube, Pose, Twist, BodyKinematics};
//! use nalgebra::Point3;
//!
//! let hull = unit_cube();
//! assert!(hull.validate().is_ok());
//!
//! // A body at rest, half submerged at identity pose
//! let pose = Pose::identity();
//! let kin = BodyKinematics::at_rest(100.0, 1.0 / 50.0);
//! assert!(kin.validate().is_ok());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)] // Many methods can't be const due to nalgebra

mod body;
mod error;
mod hull;
mod triangle;

pub use body::{BodyKinematics, Pose, Twist};
pub use error::HydroError;
pub use hull::{unit_cube, HullMesh};
pub use triangle::Triangle;

// Re-export math types for convenience
pub use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Result type for hull hydrodynamics operations.
pub type Result<T> = std::result::Result<T, HydroError>;

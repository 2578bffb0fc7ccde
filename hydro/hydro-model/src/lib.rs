//! Hydrodynamic force model for floating hulls.
//!
//! Builds on [`hydro_clip`]'s waterline clipping to evaluate four force
//! terms per submerged triangle: hydrostatic buoyancy, viscous (skin
//! friction) resistance, pressure drag, and slamming. The output is a list
//! of force-at-point entries for the host's rigid-body integrator; this
//! crate performs no integration of its own.
//!
//! # Example
//!
//! ```
//! use hydro_types::{unit_cube, BodyKinematics, Pose};
//! use hydro_model::{HydroConfig, HullHydrodynamics};
//!
//! let mut hydro = HullHydrodynamics::new(&unit_cube(), HydroConfig::ocean_water())?;
//! let applied = hydro.step(&Pose::identity(), &BodyKinematics::at_rest(250.0, 0.02));
//!
//! for entry in applied {
//!     // hand (entry.force, entry.point) to the rigid body
//! }
//! # Ok::<(), hydro_types::HydroError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)]

mod config;
pub mod forces;
mod hull;

pub use config::{HydroConfig, RHO_OCEAN_WATER, RHO_WATER, VISCOSITY_WATER_20};
pub use hull::{AppliedForce, HullHydrodynamics};

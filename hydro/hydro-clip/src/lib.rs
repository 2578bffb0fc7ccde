//! Waterline clipping of hull meshes.
//!
//! This crate produces, every physics step, the set of hull triangles lying
//! below the waterline plane (fixed at world y = 0):
//!
//! - [`WaterlineClipper`] - Clips each hull face against the waterline,
//!   reusing its buffers across steps
//! - [`SubmersionRecord`] - Per-face submerged-area and velocity history
//! - [`ClippedTriangle`] - A submerged triangle with a back-reference to
//!   its originating face
//!
//! The clipper is pure geometry: it knows nothing about forces. The force
//! model (hydro-model) consumes its output.
//!
//! # Per-step Protocol
//!
//! 1. [`WaterlineClipper::recompute`] with the body's current pose
//! 2. [`WaterlineClipper::update_velocities`] with the body's kinematics
//! 3. Read [`WaterlineClipper::clipped`] and
//!    [`WaterlineClipper::records`]; copy out anything needed past the
//!    next step
//!
//! Each simulated body owns its own clipper instance; there is no shared
//! mutable state between bodies.
//!
//! # Example
//!
//! ```
//! use hydro_types::{unit_cube, Pose};
//! use hydro_clip::WaterlineClipper;
//!
//! let mut clipper = WaterlineClipper::new(&unit_cube())?;
//! clipper.recompute(&Pose::identity());
//!
//! // 0, 1, or 2 clipped triangles per original face
//! assert!(clipper.clipped().len() <= 2 * clipper.face_count());
//! # Ok::<(), hydro_types::HydroError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod clipper;
mod record;

pub use clipper::WaterlineClipper;
pub use record::{ClippedTriangle, SubmersionRecord};

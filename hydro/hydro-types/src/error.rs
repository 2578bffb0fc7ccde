//! Error types for hull hydrodynamics.

use thiserror::Error;

/// Errors that can occur while constructing or configuring a simulation.
///
/// The per-step core itself has no fatal errors: degenerate triangles and
/// numerical singularities are suppressed locally to a zero contribution so
/// the whole-body resultant stays finite.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HydroError {
    /// Hull mesh has no faces.
    #[error("hull mesh has no faces")]
    EmptyHull,

    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references vertex {index}, but the hull has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the hull.
        vertex_count: usize,
    },

    /// Invalid timestep.
    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    /// Invalid body mass.
    #[error("invalid mass: {0} (must be positive and finite)")]
    InvalidMass(f64),

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl HydroError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydroError::FaceIndexOutOfRange {
            face: 3,
            index: 12,
            vertex_count: 8,
        };
        assert!(err.to_string().contains("face 3"));
        assert!(err.to_string().contains("12"));

        let err = HydroError::InvalidTimestep(0.0);
        assert!(err.to_string().contains("0"));

        let err = HydroError::invalid_config("negative density");
        assert!(err.to_string().contains("negative density"));
    }
}

//! Tunable coefficients for the force model.

use hydro_types::HydroError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Density of fresh water at 20 °C (kg/m³).
pub const RHO_WATER: f64 = 1000.0;

/// Density of ocean water (kg/m³).
pub const RHO_OCEAN_WATER: f64 = 1027.0;

/// Kinematic viscosity of water at 20 °C (m²/s).
pub const VISCOSITY_WATER_20: f64 = 1.0e-6;

/// Configuration bundle for the hydrodynamic force model.
///
/// An explicit value passed into every force function - never global state -
/// so the model is deterministic and testable with arbitrary coefficient
/// sets, and can be retuned between steps.
///
/// The drag and slamming coefficients are empirical tuning parameters, not
/// physically load-bearing constants; the defaults are a workable starting
/// point for a boat-sized hull.
///
/// # Example
///
/// ```
/// use hydro_model::HydroConfig;
///
/// let config = HydroConfig::ocean_water()
///     .with_hull_length(4.0)
///     .with_gravity(9.81);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HydroConfig {
    /// Fluid density (kg/m³).
    pub fluid_density: f64,
    /// Gravity magnitude (m/s²).
    pub gravity: f64,
    /// Kinematic viscosity of the fluid (m²/s).
    pub kinematic_viscosity: f64,
    /// Characteristic hull length for the Reynolds-number correlation (m).
    pub hull_length: f64,
    /// Reference speed used to normalize velocity in the pressure-drag
    /// terms (m/s).
    pub velocity_reference: f64,

    /// Linear pressure-side drag coefficient (cos θ > 0).
    pub pressure_drag_linear: f64,
    /// Quadratic pressure-side drag coefficient.
    pub pressure_drag_quadratic: f64,
    /// Pressure-side falloff exponent applied to |cos θ|.
    pub pressure_falloff: f64,
    /// Linear suction-side drag coefficient (cos θ < 0).
    pub suction_drag_linear: f64,
    /// Quadratic suction-side drag coefficient.
    pub suction_drag_quadratic: f64,
    /// Suction-side falloff exponent applied to |cos θ|.
    pub suction_falloff: f64,

    /// Acceleration at which the slamming ramp saturates (m/s²).
    pub slamming_max_acceleration: f64,
    /// Exponent shaping the slamming ramp.
    pub slamming_exponent: f64,
    /// Overall scale on the slamming force.
    pub slamming_ramp_scale: f64,
}

impl Default for HydroConfig {
    fn default() -> Self {
        Self {
            fluid_density: RHO_OCEAN_WATER,
            gravity: 9.81,
            kinematic_viscosity: VISCOSITY_WATER_20,
            hull_length: 1.0,
            velocity_reference: 1.0,
            pressure_drag_linear: 10.0,
            pressure_drag_quadratic: 10.0,
            pressure_falloff: 0.5,
            suction_drag_linear: 10.0,
            suction_drag_quadratic: 10.0,
            suction_falloff: 0.5,
            slamming_max_acceleration: 20.0,
            slamming_exponent: 2.0,
            slamming_ramp_scale: 1.0,
        }
    }
}

impl HydroConfig {
    /// Defaults for fresh water.
    #[must_use]
    pub fn fresh_water() -> Self {
        Self {
            fluid_density: RHO_WATER,
            ..Default::default()
        }
    }

    /// Defaults for ocean water.
    #[must_use]
    pub fn ocean_water() -> Self {
        Self {
            fluid_density: RHO_OCEAN_WATER,
            ..Default::default()
        }
    }

    /// Set the fluid density.
    #[must_use]
    pub fn with_fluid_density(mut self, density: f64) -> Self {
        self.fluid_density = density;
        self
    }

    /// Set the gravity magnitude.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the characteristic hull length.
    #[must_use]
    pub fn with_hull_length(mut self, length: f64) -> Self {
        self.hull_length = length;
        self
    }

    /// Set the pressure-drag reference speed.
    #[must_use]
    pub fn with_velocity_reference(mut self, reference: f64) -> Self {
        self.velocity_reference = reference;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HydroError::InvalidConfig`] if a physical parameter is
    /// non-positive or non-finite, or a coefficient is non-finite.
    pub fn validate(&self) -> hydro_types::Result<()> {
        let positive = [
            ("fluid_density", self.fluid_density),
            ("gravity", self.gravity),
            ("kinematic_viscosity", self.kinematic_viscosity),
            ("hull_length", self.hull_length),
            ("velocity_reference", self.velocity_reference),
            ("slamming_max_acceleration", self.slamming_max_acceleration),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HydroError::invalid_config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let finite = [
            ("pressure_drag_linear", self.pressure_drag_linear),
            ("pressure_drag_quadratic", self.pressure_drag_quadratic),
            ("pressure_falloff", self.pressure_falloff),
            ("suction_drag_linear", self.suction_drag_linear),
            ("suction_drag_quadratic", self.suction_drag_quadratic),
            ("suction_falloff", self.suction_falloff),
            ("slamming_exponent", self.slamming_exponent),
            ("slamming_ramp_scale", self.slamming_ramp_scale),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(HydroError::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(HydroConfig::default().validate().is_ok());
        assert!(HydroConfig::fresh_water().validate().is_ok());
        assert!(HydroConfig::ocean_water().validate().is_ok());
    }

    #[test]
    fn named_fluids() {
        assert_eq!(HydroConfig::fresh_water().fluid_density, RHO_WATER);
        assert_eq!(HydroConfig::ocean_water().fluid_density, RHO_OCEAN_WATER);
    }

    #[test]
    fn invalid_values_rejected() {
        let bad = HydroConfig::default().with_fluid_density(-1.0);
        assert!(bad.validate().is_err());

        let bad = HydroConfig::default().with_hull_length(0.0);
        assert!(bad.validate().is_err());

        let bad = HydroConfig {
            pressure_falloff: f64::NAN,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn builder_chains() {
        let config = HydroConfig::fresh_water()
            .with_hull_length(3.5)
            .with_gravity(9.82)
            .with_velocity_reference(2.0);
        assert_eq!(config.hull_length, 3.5);
        assert_eq!(config.gravity, 9.82);
        assert_eq!(config.velocity_reference, 2.0);
    }
}

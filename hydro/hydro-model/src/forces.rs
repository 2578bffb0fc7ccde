//! Per-triangle hydrodynamic force formulas.
//!
//! Pure functions: identical inputs yield bit-identical outputs. Every
//! function sanitizes its result, replacing a non-finite force with the
//! zero vector so one degenerate triangle cannot corrupt the whole-body
//! resultant ("fail to zero", never an error).

use hydro_clip::SubmersionRecord;
use hydro_types::{Triangle, Vector3};

use crate::HydroConfig;

/// Replace a force containing `NaN`/`Inf` components with the zero vector.
///
/// Applied at the boundary of every force function.
#[must_use]
pub fn sanitize(force: Vector3<f64>) -> Vector3<f64> {
    if (force.x + force.y + force.z).is_finite() {
        force
    } else {
        Vector3::zeros()
    }
}

/// Cosine of the angle between a face normal and the point velocity.
///
/// Positive means the face is pressure-facing (bow side), negative means
/// suction-facing (stern side). Zero relative velocity yields 0.
#[must_use]
pub fn cos_theta(normal: &Vector3<f64>, velocity: &Vector3<f64>) -> f64 {
    let speed = velocity.norm();
    if speed < f64::EPSILON {
        0.0
    } else {
        normal.dot(velocity) / speed
    }
}

/// Hydrostatic buoyancy on a submerged triangle.
///
/// `F = -ρ g depth area normal`, with the horizontal components zeroed:
/// hydrostatic pressure integrated over the face acts only to restore
/// vertical equilibrium, and over a closed hull the vertical components
/// sum to Archimedes' principle.
#[must_use]
pub fn buoyancy(triangle: &Triangle, config: &HydroConfig) -> Vector3<f64> {
    let Some(normal) = triangle.normal() else {
        return Vector3::zeros();
    };

    let magnitude =
        config.fluid_density * config.gravity * triangle.depth_to_surface() * triangle.area();
    let mut force = normal * -magnitude;
    force.x = 0.0;
    force.z = 0.0;

    sanitize(force)
}

/// Skin-friction coefficient from the ITTC 1957 correlation.
///
/// `Cf = 0.075 / (log10(Rn) - 2)²` with `Rn = speed · length / viscosity`.
/// Zero speed, length, or viscosity means no flow to model and yields 0
/// rather than a division by zero; a non-finite result also falls back
/// to 0.
#[must_use]
pub fn resistance_coefficient(speed: f64, length: f64, viscosity: f64) -> f64 {
    if speed <= 0.0 || length <= 0.0 || viscosity <= 0.0 {
        return 0.0;
    }

    let reynolds = speed * length / viscosity;
    let d = reynolds.log10() - 2.0;
    let cf = 0.075 / (d * d);

    if cf.is_finite() {
        cf
    } else {
        0.0
    }
}

/// Viscous water resistance on a submerged triangle.
///
/// The flow a face feels is the component of its point velocity tangential
/// to the face; the resistance acts against that direction with the full
/// point speed and quadratic scaling:
/// `F = ½ ρ Cf area |v_f| v_f` where `v_f = |v| · (-tangent direction)`.
#[must_use]
pub fn viscous_resistance(
    triangle: &Triangle,
    point_velocity: &Vector3<f64>,
    cf: f64,
    config: &HydroConfig,
) -> Vector3<f64> {
    let Some(normal) = triangle.normal() else {
        return Vector3::zeros();
    };

    let tangential = point_velocity - normal * point_velocity.dot(&normal);
    let tangential_norm = tangential.norm();
    if tangential_norm < f64::EPSILON {
        return Vector3::zeros();
    }

    let flow = (tangential / tangential_norm) * -point_velocity.norm();
    let force = flow * (0.5 * config.fluid_density * cf * triangle.area() * flow.norm());

    sanitize(force)
}

/// Pressure drag on a submerged triangle.
///
/// Two coefficient sets: the pressure side (cos θ > 0, facing into the
/// relative flow) pushes against the normal, the suction side (cos θ < 0)
/// pulls along it. Speed is normalized by the configured reference
/// velocity, and each side's falloff exponent applies to |cos θ|.
#[must_use]
pub fn pressure_drag(
    triangle: &Triangle,
    point_velocity: &Vector3<f64>,
    config: &HydroConfig,
) -> Vector3<f64> {
    let Some(normal) = triangle.normal() else {
        return Vector3::zeros();
    };

    let speed = point_velocity.norm();
    if speed < f64::EPSILON {
        return Vector3::zeros();
    }

    let cos = normal.dot(point_velocity) / speed;
    let v = speed / config.velocity_reference;
    let area = triangle.area();

    let force = if cos > 0.0 {
        let magnitude = v.mul_add(config.pressure_drag_quadratic * v, config.pressure_drag_linear * v);
        normal * (-magnitude * area * cos.abs().powf(config.pressure_falloff))
    } else {
        let magnitude = v.mul_add(config.suction_drag_quadratic * v, config.suction_drag_linear * v);
        normal * (magnitude * area * cos.abs().powf(config.suction_falloff))
    };

    sanitize(force)
}

/// Slamming force on a triangle whose submerged area is growing rapidly.
///
/// A heuristic impact surrogate, not an impact solver. The rate of
/// submerged-volume change
/// `r = (A_sub·v - A_sub_prev·v_prev) / (A_orig · dt)`
/// is read as an acceleration; a "stopping force"
/// `m · v_point · 2·area / total_area` is scaled by
/// `clamp01(|r| / acc_max)^p`, by cos θ, and by the ramp scale, opposing
/// the point velocity. Faces that are not pressure-facing (cos θ < 0) or
/// have zero original area contribute nothing.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn slamming(
    triangle: &Triangle,
    record: &SubmersionRecord,
    point_velocity: &Vector3<f64>,
    body_mass: f64,
    total_body_area: f64,
    dt: f64,
    config: &HydroConfig,
) -> Vector3<f64> {
    let Some(normal) = triangle.normal() else {
        return Vector3::zeros();
    };

    let cos = cos_theta(&normal, point_velocity);
    if cos < 0.0 || record.original_area <= 0.0 || total_body_area <= 0.0 || dt <= 0.0 {
        return Vector3::zeros();
    }

    let current = record.velocity * record.submerged_area;
    let previous = record.previous_velocity * record.previous_submerged_area;
    let rate = (current - previous) / (record.original_area * dt);
    let acceleration = rate.norm();

    let stopping = point_velocity * (body_mass * 2.0 * triangle.area() / total_body_area);
    let ramp = (acceleration / config.slamming_max_acceleration)
        .clamp(0.0, 1.0)
        .powf(config.slamming_exponent);

    sanitize(stopping * (-ramp * cos * config.slamming_ramp_scale))
}

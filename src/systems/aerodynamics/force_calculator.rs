use bevy::prelude::*;
use nalgebra::Vector3;

use super::coefficients::{angle_of_attack_deg, calculate_coefficients};
use crate::components::{
    AeroState, Airfoil, ColliderBounds, ExposureMode, ExposureReading, Force, ForceCategory,
    PhysicsComponent, SpatialComponent,
};
use crate::resources::Atmosphere;
use crate::utils::DIRECTION_EPSILON;

// --- Pure Calculation Logic ---

/// Everything the force model needs for one airfoil on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilInput {
    /// World-frame velocity of the airfoil
    pub velocity: Vector3<f64>,
    /// World-frame unit normal of the surface
    pub normal: Vector3<f64>,
    pub air_density: f64,
    /// Collider half-extents along the local x and z axes
    pub half_extent_x: f64,
    pub half_extent_z: f64,
    /// Visible fraction of the planform, in [0, 1]
    pub exposure: f64,
    pub stall_threshold_deg: f64,
    pub turbulence_threshold_deg: f64,
}

/// Calculates lift, drag and the resulting world-frame force for one airfoil.
///
/// Lift acts along `v x (n x v)`, the part of the normal perpendicular to the
/// flow; drag acts against the flow. When either direction is undefined (zero
/// velocity, or velocity parallel to the normal for lift) that component
/// contributes no force.
pub fn calculate_airfoil_force(input: &AirfoilInput) -> AeroState {
    let velocity = input.velocity;
    let angle_of_attack_deg = angle_of_attack_deg(&velocity, &input.normal);
    let coefficients = calculate_coefficients(
        angle_of_attack_deg,
        input.stall_threshold_deg,
        input.turbulence_threshold_deg,
    );

    let exposed_area = 4.0 * input.exposure * input.half_extent_x * input.half_extent_z;
    let dynamic_pressure = input.air_density * velocity.norm_squared() / 2.0;

    let lift = coefficients.lift * exposed_area * dynamic_pressure;
    let drag = coefficients.drag * exposed_area * dynamic_pressure;

    let lift_direction = velocity
        .cross(&input.normal.cross(&velocity))
        .try_normalize(DIRECTION_EPSILON);
    let drag_direction = (-velocity).try_normalize(DIRECTION_EPSILON);

    let force = lift_direction.map_or(Vector3::zeros(), |dir| dir * lift)
        + drag_direction.map_or(Vector3::zeros(), |dir| dir * drag);

    AeroState {
        velocity,
        angle_of_attack_deg,
        stalled: coefficients.regime.stalled,
        turbulent: coefficients.regime.turbulent,
        coefficient_of_lift: coefficients.lift,
        coefficient_of_drag: coefficients.drag,
        exposure: input.exposure,
        exposed_area,
        lift,
        drag,
        force,
    }
}

// --- Bevy System ---

/// Computes the aerodynamic force of every airfoil and replaces last tick's
/// aerodynamic force on its body. Runs after the exposure estimator.
pub fn airfoil_force_system(
    mut airfoils: Query<(
        &Airfoil,
        &ColliderBounds,
        &SpatialComponent,
        &ExposureReading,
        &mut PhysicsComponent,
        &mut AeroState,
    )>,
    atmosphere: Res<Atmosphere>,
) {
    for (airfoil, bounds, spatial, reading, mut physics, mut state) in airfoils.iter_mut() {
        let exposure = match airfoil.exposure {
            ExposureMode::Full => 1.0,
            ExposureMode::Measured(_) => reading.0,
        };

        let input = AirfoilInput {
            velocity: spatial.velocity,
            normal: airfoil.world_normal(&spatial.attitude),
            air_density: atmosphere.density,
            half_extent_x: bounds.half_extents.x,
            half_extent_z: bounds.half_extents.z,
            exposure,
            stall_threshold_deg: airfoil.stall_threshold_deg,
            turbulence_threshold_deg: airfoil.turbulence_threshold_deg,
        };

        *state = calculate_airfoil_force(&input);

        physics.clear_category(&ForceCategory::Aerodynamic);
        physics.add_force(Force {
            vector: state.force,
            category: ForceCategory::Aerodynamic,
        });
    }
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{
    angle_between_deg, deg_to_rad, PRE_STALL_DEG_PER_CL, STALLED_LIFT_GAIN, TURBULENT_DRAG_GAIN,
};

/// Flow regime of an airfoil. The two flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRegime {
    pub stalled: bool,
    pub turbulent: bool,
}

impl FlowRegime {
    /// Both comparisons are strict: exactly on a threshold is not past it.
    pub fn classify(
        angle_of_attack_deg: f64,
        stall_threshold_deg: f64,
        turbulence_threshold_deg: f64,
    ) -> Self {
        let magnitude = angle_of_attack_deg.abs();
        Self {
            stalled: magnitude > stall_threshold_deg,
            turbulent: magnitude > turbulence_threshold_deg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCoefficients {
    pub lift: f64,
    pub drag: f64,
    pub regime: FlowRegime,
}

/// Angle between the airflow and the surface plane, in degrees.
/// Flow perpendicular to the normal is 0; flow along the normal is -90.
pub fn angle_of_attack_deg(velocity: &Vector3<f64>, normal: &Vector3<f64>) -> f64 {
    angle_between_deg(velocity, normal) - 90.0
}

/// Piecewise lift/drag model.
///
/// * lift: `aoa / 10` until stalled, then `1.2 sin(2 aoa)`
/// * drag: `0` until turbulent, then `|2 sin(aoa)|`
///
/// The lift curve is discontinuous at the stall threshold.
pub fn calculate_coefficients(
    angle_of_attack_deg: f64,
    stall_threshold_deg: f64,
    turbulence_threshold_deg: f64,
) -> AeroCoefficients {
    let regime = FlowRegime::classify(
        angle_of_attack_deg,
        stall_threshold_deg,
        turbulence_threshold_deg,
    );
    let aoa_rad = deg_to_rad(angle_of_attack_deg);

    let lift = if regime.stalled {
        STALLED_LIFT_GAIN * (2.0 * aoa_rad).sin()
    } else {
        angle_of_attack_deg / PRE_STALL_DEG_PER_CL
    };

    let drag = if regime.turbulent {
        (TURBULENT_DRAG_GAIN * aoa_rad.sin()).abs()
    } else {
        0.0
    };

    AeroCoefficients { lift, drag, regime }
}

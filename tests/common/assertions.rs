use aerofoil::components::AeroState;

/// Every field of an aerodynamic state must be a real number.
pub fn assert_aero_state_finite(state: &AeroState) {
    assert!(state.angle_of_attack_deg.is_finite(), "aoa: {:?}", state);
    assert!(state.coefficient_of_lift.is_finite(), "Cl: {:?}", state);
    assert!(state.coefficient_of_drag.is_finite(), "Cd: {:?}", state);
    assert!(state.lift.is_finite() && state.drag.is_finite(), "{:?}", state);
    assert!(state.force.iter().all(|c| c.is_finite()), "force: {:?}", state);
    assert!(
        (0.0..=1.0).contains(&state.exposure),
        "exposure out of range: {:?}",
        state
    );
}

pub fn assert_exposure_between(state: &AeroState, low: f64, high: f64) {
    assert!(
        state.exposure > low && state.exposure < high,
        "exposure {} not in ({}, {})",
        state.exposure,
        low,
        high
    );
}

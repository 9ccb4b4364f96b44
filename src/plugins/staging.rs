use bevy::prelude::*;

/// Order of work inside one physics tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Chase cameras follow their targets
    Camera,
    /// Measured airfoils are rendered to find their exposure
    Exposure,
    /// Lift and drag are computed and applied
    Forces,
    /// Cosmetic updates from the new aerodynamic state
    Visualization,
}

/// Chains the [`FlightSet`]s in `FixedUpdate`. Safe to call from several plugins.
pub fn configure_flight_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            FlightSet::Camera,
            FlightSet::Exposure,
            FlightSet::Forces,
            FlightSet::Visualization,
        )
            .chain(),
    );
}

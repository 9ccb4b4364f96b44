use bevy::prelude::*;

use super::staging::{configure_flight_sets, FlightSet};
use crate::systems::{chase_camera_system, validate_chase_setup};

/// Moves every [`crate::components::ChaseCamera`] at the start of each physics tick.
pub struct ChaseCameraPlugin;

impl Plugin for ChaseCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AppExit>();
        configure_flight_sets(app);

        app.add_systems(PostStartup, validate_chase_setup)
            .add_systems(FixedUpdate, chase_camera_system.in_set(FlightSet::Camera));
    }
}

use bevy::prelude::*;

use crate::resources::ControlInputs;
use crate::systems::{control_surface_system, validate_control_setup};

/// Drives control-surface hinges from [`ControlInputs`] once per frame.
pub struct ControlSurfacePlugin;

impl Plugin for ControlSurfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlInputs>()
            .add_event::<AppExit>()
            .add_systems(PostStartup, validate_control_setup)
            .add_systems(Update, control_surface_system);
    }
}

use bevy::prelude::*;

use crate::components::{ControlSurface, HingeJoint};
use crate::resources::ControlInputs;

/// System driving every control surface's hinge from its named input axis.
///
/// Runs once per frame. The physics tick that follows uses whatever target was
/// written last, so the surface lags the input by at most one frame.
pub fn control_surface_system(
    inputs: Res<ControlInputs>,
    mut surfaces: Query<(Entity, &ControlSurface, &mut HingeJoint)>,
) {
    for (entity, surface, mut hinge) in surfaces.iter_mut() {
        let axis_value = inputs.axis(&surface.axis);
        hinge.target_position = surface.target_for(axis_value);
        debug!(
            "Surface {:?}: {} = {:.3} -> hinge target {:.3}",
            entity, surface.axis, axis_value, hinge.target_position
        );
    }
}

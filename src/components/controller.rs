use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Maps a named control axis linearly onto the entity's [`HingeJoint`].
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    /// Key into [`crate::resources::ControlInputs`]
    pub axis: String,
    pub coefficient: f64,
}

impl ControlSurface {
    pub fn new(axis: impl Into<String>, coefficient: f64) -> Self {
        Self {
            axis: axis.into(),
            coefficient,
        }
    }

    /// Actuator target for an axis value in [-1, 1].
    pub fn target_for(&self, axis_value: f32) -> f64 {
        self.coefficient * axis_value as f64
    }
}

/// Hinge joint driven towards `target_position` by the external joint solver.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HingeJoint {
    pub target_position: f64,
}

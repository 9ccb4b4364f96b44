use bevy::prelude::*;

/// Keeps the entity's `Transform` trailing ahead of a body along its velocity,
/// looking back at it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ChaseCamera {
    /// Tracked body. Not owned; a despawned target freezes the camera.
    pub target: Entity,
    /// Distance from the target along its velocity direction
    pub distance: f64,
}

impl ChaseCamera {
    pub fn new(target: Entity, distance: f64) -> Self {
        Self { target, distance }
    }
}

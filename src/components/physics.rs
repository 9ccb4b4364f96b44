use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Force accumulator of a rigid body. Integration happens outside this crate;
/// systems here only publish the forces they are responsible for.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub forces: Vec<Force>,
}

/// A force applied at the centre of mass, in the world frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    /// Drop every force of the given category, keeping the rest.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    pub fn net_force(&self) -> Vector3<f64> {
        self.forces
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + f.vector)
    }
}

use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::AirfoilConfig;
use crate::utils::{DEFAULT_STALL_THRESHOLD_DEG, DEFAULT_TURBULENCE_THRESHOLD_DEG};

/// A lifting surface. Forces are computed once per physics tick from the
/// entity's [`crate::components::SpatialComponent`] and applied to its
/// [`crate::components::PhysicsComponent`].
#[derive(Component, Debug, Clone, PartialEq)]
#[require(AeroState, ExposureReading)]
pub struct Airfoil {
    /// |aoa| above this (strictly) switches lift to the stalled formula [deg]
    pub stall_threshold_deg: f64,
    /// |aoa| above this (strictly) makes drag non-zero [deg]
    pub turbulence_threshold_deg: f64,
    /// Surface "up" in the body frame
    pub local_normal: Vector3<f64>,
    pub exposure: ExposureMode,
}

impl Default for Airfoil {
    fn default() -> Self {
        Self {
            stall_threshold_deg: DEFAULT_STALL_THRESHOLD_DEG,
            turbulence_threshold_deg: DEFAULT_TURBULENCE_THRESHOLD_DEG,
            local_normal: Vector3::y(),
            exposure: ExposureMode::Full,
        }
    }
}

impl Airfoil {
    pub fn from_config(config: &AirfoilConfig) -> Self {
        Self {
            stall_threshold_deg: config.stall_threshold_deg,
            turbulence_threshold_deg: config.turbulence_threshold_deg,
            ..Default::default()
        }
    }

    pub fn with_exposure(mut self, exposure: ExposureMode) -> Self {
        self.exposure = exposure;
        self
    }

    /// Surface normal in the world frame.
    pub fn world_normal(&self, attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
        attitude * self.local_normal
    }
}

/// Source of the exposed-area fraction for an airfoil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExposureMode {
    /// The whole planform counts as exposed.
    Full,
    /// Exposure is measured every physics tick by rendering the aircraft.
    Measured(ExposureSensor),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureSensor {
    /// Viewpoint the wing silhouette is measured from
    pub viewpoint: Entity,
    /// Optional viewpoint rendered once per measurement for display only
    pub preview: Option<Entity>,
}

impl ExposureSensor {
    pub fn new(viewpoint: Entity) -> Self {
        Self {
            viewpoint,
            preview: None,
        }
    }

    pub fn with_preview(mut self, preview: Entity) -> Self {
        self.preview = Some(preview);
        self
    }
}

/// Collider bounds of a wing. Only the x and z half-extents enter the
/// planform area.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderBounds {
    pub half_extents: Vector3<f64>,
}

impl ColliderBounds {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            half_extents: Vector3::new(x, y, z),
        }
    }

    /// Full planform area from the half-extents.
    pub fn planform_area(&self) -> f64 {
        4.0 * self.half_extents.x * self.half_extents.z
    }
}

/// Last measured exposure fraction, 1.0 until a measurement exists.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ExposureReading(pub f64);

impl Default for ExposureReading {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Aerodynamic state of an airfoil for the current physics tick.
/// Overwritten in full every tick.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroState {
    pub velocity: Vector3<f64>,
    pub angle_of_attack_deg: f64,
    pub stalled: bool,
    pub turbulent: bool,
    pub coefficient_of_lift: f64,
    pub coefficient_of_drag: f64,
    pub exposure: f64,
    pub exposed_area: f64,
    pub lift: f64,
    pub drag: f64,
    pub force: Vector3<f64>,
}

impl Default for AeroState {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            angle_of_attack_deg: 0.0,
            stalled: false,
            turbulent: false,
            coefficient_of_lift: 0.0,
            coefficient_of_drag: 0.0,
            exposure: 1.0,
            exposed_area: 0.0,
            lift: 0.0,
            drag: 0.0,
            force: Vector3::zeros(),
        }
    }
}

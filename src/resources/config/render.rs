use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{MaterialId, RenderLayer};

/// Marker material and isolation layer used by the exposure estimator.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    /// Otherwise unused material the wing wears while being measured
    pub marker: MaterialId,
    /// Layer nothing else is drawn on
    pub isolation_layer: RenderLayer,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            marker: MaterialId(255),
            isolation_layer: RenderLayer::new(RenderLayer::MAX_INDEX).unwrap_or_default(),
        }
    }
}

/// Materials swapped onto a wing to show its stall state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StallDisplayConfig {
    pub normal: MaterialId,
    pub stalled: MaterialId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub id: MaterialId,
    /// Opaque RGBA colour
    pub color: [u8; 4],
}

impl MaterialConfig {
    pub fn new(id: u32, color: [u8; 4]) -> Self {
        Self {
            id: MaterialId(id),
            color,
        }
    }
}

pub fn default_materials() -> Vec<MaterialConfig> {
    vec![
        MaterialConfig::new(1, [200, 200, 200, 255]), // airframe
        MaterialConfig::new(2, [220, 40, 40, 255]),   // stalled wing
        MaterialConfig::new(255, [255, 0, 255, 255]), // exposure marker
    ]
}

use bevy::prelude::Entity;
use thiserror::Error;

use crate::components::MaterialId;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aerodynamics configuration: {0}")]
    ValidationError(String),
}

/// Problems with the spawned scene, detected once before the first physics tick.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("{role} {entity:?} is missing required component {component}")]
    MissingComponent {
        entity: Entity,
        role: &'static str,
        component: &'static str,
    },

    #[error("{role} {entity:?} references {target:?}, which does not exist or has no {component}")]
    MissingReference {
        entity: Entity,
        role: &'static str,
        target: Entity,
        component: &'static str,
    },

    #[error("Viewpoint {entity:?} has a zero-sized render target ({width}x{height})")]
    EmptyRenderTarget {
        entity: Entity,
        width: u32,
        height: u32,
    },

    #[error("Airfoil {entity:?} has negative half-extents (x = {x}, z = {z})")]
    NegativeExtents { entity: Entity, x: f64, z: f64 },

    #[error("Material palette error: {0}")]
    Palette(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Render target of {width}x{height} pixels cannot be allocated")]
    InvalidTarget { width: u32, height: u32 },

    #[error("Viewpoint {0:?} does not exist")]
    MissingViewpoint(Entity),

    #[error("Material {0:?} is not in the palette")]
    UnknownMaterial(MaterialId),

    #[error("No material palette resource is present")]
    MissingPalette,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExposureError {
    #[error("Scene node {node:?} has no {what}")]
    MissingNode { node: Entity, what: &'static str },

    #[error("Viewpoint {0:?} has no render mask")]
    MissingViewpoint(Entity),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

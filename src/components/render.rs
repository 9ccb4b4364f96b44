use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a flat-coloured material in the [`crate::resources::MaterialPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material#{}", self.0)
    }
}

/// One of 32 visibility layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RenderLayer(u8);

impl RenderLayer {
    pub const MAX_INDEX: u8 = 31;
    pub const DEFAULT: Self = Self(0);

    pub fn new(index: u8) -> Option<Self> {
        (index <= Self::MAX_INDEX).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl Default for RenderLayer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for RenderLayer {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| {
            format!(
                "render layer {} is out of range (0..={})",
                index,
                Self::MAX_INDEX
            )
        })
    }
}

impl From<RenderLayer> for u8 {
    fn from(layer: RenderLayer) -> Self {
        layer.0
    }
}

/// Set of layers a viewpoint renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: Self = Self(u32::MAX);
    pub const NONE: Self = Self(0);

    pub fn only(layer: RenderLayer) -> Self {
        Self(1 << layer.index())
    }

    pub fn with(self, layer: RenderLayer) -> Self {
        Self(self.0 | (1 << layer.index()))
    }

    pub fn without(self, layer: RenderLayer) -> Self {
        Self(self.0 & !(1 << layer.index()))
    }

    pub fn contains(self, layer: RenderLayer) -> bool {
        self.0 & (1 << layer.index()) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Material currently assigned to a scene node.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSlot(pub MaterialId);

/// Layer a scene node is drawn on.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLayer(pub RenderLayer);

/// Box-shaped geometry drawn at the entity's `SpatialComponent` pose.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(VisibilityLayer)]
pub struct Renderable {
    pub half_extents: Vector3<f64>,
}

impl Renderable {
    pub fn cuboid(x: f64, y: f64, z: f64) -> Self {
        Self {
            half_extents: Vector3::new(x, y, z),
        }
    }
}

/// Pinhole viewpoint placed at the entity's `Transform`, looking down local -Z.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub render_mask: LayerMask,
    pub width: u32,
    pub height: u32,
    pub vertical_fov_deg: f64,
}

impl Viewpoint {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            render_mask: LayerMask::ALL,
            width,
            height,
            vertical_fov_deg: 60.0,
        }
    }

    pub fn with_fov(mut self, vertical_fov_deg: f64) -> Self {
        self.vertical_fov_deg = vertical_fov_deg;
        self
    }

    pub fn with_mask(mut self, render_mask: LayerMask) -> Self {
        self.render_mask = render_mask;
        self
    }
}

use bevy::prelude::*;
use std::collections::HashMap;

use super::config::render::MaterialConfig;
use crate::components::MaterialId;

/// Flat colours of every material the rasterizer can draw.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MaterialPalette {
    colors: HashMap<MaterialId, [u8; 4]>,
}

impl MaterialPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configs(materials: &[MaterialConfig]) -> Self {
        let mut palette = Self::new();
        for material in materials {
            palette.insert(material.id, material.color);
        }
        palette
    }

    pub fn insert(&mut self, id: MaterialId, color: [u8; 4]) {
        self.colors.insert(id, color);
    }

    pub fn color(&self, id: MaterialId) -> Option<[u8; 4]> {
        self.colors.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Every colour must be fully opaque so rendered pixels match exactly.
    pub fn check_opaque(&self) -> Result<(), String> {
        let mut ids: Vec<_> = self.colors.keys().copied().collect();
        ids.sort();
        match ids.into_iter().find(|id| self.colors[id][3] != u8::MAX) {
            Some(id) => Err(format!("{} is not fully opaque", id)),
            None => Ok(()),
        }
    }

    /// The marker must exist and its colour must not be shared with any other
    /// material. Returns the marker colour.
    pub fn check_marker(&self, marker: MaterialId) -> Result<[u8; 4], String> {
        let color = self
            .color(marker)
            .ok_or_else(|| format!("marker {} is not in the palette", marker))?;

        if let Some(other) = self
            .colors
            .iter()
            .find(|(id, c)| **id != marker && **c == color)
            .map(|(id, _)| *id)
        {
            return Err(format!("marker {} shares its colour with {}", marker, other));
        }

        Ok(color)
    }
}

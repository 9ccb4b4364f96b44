use bevy::prelude::*;

use super::renderer::Rasterizer;
use super::types::{DrawItem, ViewSetup};
use super::{PixelBuffer, Renderer, SceneGraph};
use crate::components::{
    LayerMask, MaterialId, MaterialSlot, RenderLayer, Renderable, SpatialComponent, Viewpoint,
    VisibilityLayer,
};
use crate::resources::MaterialPalette;
use crate::utils::{isometry_from_transform, RenderError};

/// [`Renderer`] and [`SceneGraph`] over the ECS world: nodes are entities with
/// `MaterialSlot` and `VisibilityLayer`, viewpoints are entities with a
/// `Viewpoint` and a `Transform`.
pub struct WorldScene<'w> {
    world: &'w mut World,
    rasterizer: &'w mut dyn Rasterizer,
}

impl<'w> WorldScene<'w> {
    pub fn new(world: &'w mut World, rasterizer: &'w mut dyn Rasterizer) -> Self {
        Self { world, rasterizer }
    }
}

impl SceneGraph for WorldScene<'_> {
    fn layer(&self, node: Entity) -> Option<RenderLayer> {
        self.world.get::<VisibilityLayer>(node).map(|layer| layer.0)
    }

    fn set_layer(&mut self, node: Entity, layer: RenderLayer) {
        if let Some(mut current) = self.world.get_mut::<VisibilityLayer>(node) {
            current.0 = layer;
        }
    }

    fn material(&self, node: Entity) -> Option<MaterialId> {
        self.world.get::<MaterialSlot>(node).map(|slot| slot.0)
    }

    fn set_material(&mut self, node: Entity, material: MaterialId) {
        if let Some(mut slot) = self.world.get_mut::<MaterialSlot>(node) {
            slot.0 = material;
        }
    }
}

impl Renderer for WorldScene<'_> {
    fn render(&mut self, viewpoint: Entity) -> Result<PixelBuffer, RenderError> {
        let (view, mask) = {
            let settings = self
                .world
                .get::<Viewpoint>(viewpoint)
                .ok_or(RenderError::MissingViewpoint(viewpoint))?;
            let transform = self
                .world
                .get::<Transform>(viewpoint)
                .copied()
                .unwrap_or_default();
            (
                ViewSetup::new(isometry_from_transform(&transform), settings),
                settings.render_mask,
            )
        };

        let mut nodes = self
            .world
            .query::<(&SpatialComponent, &Renderable, &MaterialSlot, &VisibilityLayer)>();
        let world: &World = self.world;
        let palette = world
            .get_resource::<MaterialPalette>()
            .ok_or(RenderError::MissingPalette)?;

        let items = nodes
            .iter(world)
            .filter(|(_, _, _, layer)| mask.contains(layer.0))
            .map(|(spatial, renderable, material, _)| {
                let color = palette
                    .color(material.0)
                    .ok_or(RenderError::UnknownMaterial(material.0))?;
                Ok(DrawItem {
                    pose: spatial.pose(),
                    half_extents: renderable.half_extents,
                    color,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        self.rasterizer.rasterize(&view, &items)
    }

    fn render_mask(&self, viewpoint: Entity) -> Option<LayerMask> {
        self.world
            .get::<Viewpoint>(viewpoint)
            .map(|settings| settings.render_mask)
    }

    fn set_render_mask(&mut self, viewpoint: Entity, mask: LayerMask) {
        if let Some(mut settings) = self.world.get_mut::<Viewpoint>(viewpoint) {
            settings.render_mask = mask;
        }
    }
}

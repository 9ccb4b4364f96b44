mod buffer;
mod renderer;
mod scene;
mod types;

pub use buffer::PixelBuffer;
pub use renderer::{ActiveRasterizer, Rasterizer, SkiaRasterizer};
pub use scene::WorldScene;
pub use types::{DrawItem, ViewSetup};

use bevy::prelude::Entity;

use crate::components::{LayerMask, MaterialId, RenderLayer};
use crate::utils::RenderError;

/// Renders the scene as seen from a viewpoint and owns each viewpoint's
/// render mask.
pub trait Renderer {
    /// Synchronous render and read-back.
    fn render(&mut self, viewpoint: Entity) -> Result<PixelBuffer, RenderError>;

    fn render_mask(&self, viewpoint: Entity) -> Option<LayerMask>;

    fn set_render_mask(&mut self, viewpoint: Entity, mask: LayerMask);
}

/// Per-node visibility layer and material assignment.
pub trait SceneGraph {
    fn layer(&self, node: Entity) -> Option<RenderLayer>;

    fn set_layer(&mut self, node: Entity, layer: RenderLayer);

    fn material(&self, node: Entity) -> Option<MaterialId>;

    fn set_material(&mut self, node: Entity, material: MaterialId);
}

use bevy::prelude::*;

use crate::components::{LayerMask, MaterialId, RenderLayer};
use crate::rendering::{Renderer, SceneGraph};
use crate::utils::ExposureError;

/// Scoped isolation of one wing for exposure measurement.
///
/// While held, the wing wears the marker material on the isolation layer and
/// the viewpoint renders only that layer. [`IsolationGuard::end_isolation`]
/// puts layer and mask back early; dropping the guard restores whatever is
/// still swapped, material last. Other systems never see the swapped state
/// once the guard is gone.
pub struct IsolationGuard<'a, S: SceneGraph + Renderer> {
    scene: &'a mut S,
    wing: Entity,
    viewpoint: Entity,
    saved_material: MaterialId,
    saved_layer: Option<RenderLayer>,
    saved_mask: Option<LayerMask>,
}

impl<'a, S: SceneGraph + Renderer> IsolationGuard<'a, S> {
    /// Reads every original value before touching anything, so a missing
    /// node leaves the scene untouched.
    pub fn acquire(
        scene: &'a mut S,
        wing: Entity,
        viewpoint: Entity,
        marker: MaterialId,
        isolation_layer: RenderLayer,
    ) -> Result<Self, ExposureError> {
        let saved_material = scene.material(wing).ok_or(ExposureError::MissingNode {
            node: wing,
            what: "material",
        })?;
        let saved_layer = scene.layer(wing).ok_or(ExposureError::MissingNode {
            node: wing,
            what: "visibility layer",
        })?;
        let saved_mask = scene
            .render_mask(viewpoint)
            .ok_or(ExposureError::MissingViewpoint(viewpoint))?;

        scene.set_material(wing, marker);
        scene.set_layer(wing, isolation_layer);
        scene.set_render_mask(viewpoint, LayerMask::only(isolation_layer));

        Ok(Self {
            scene,
            wing,
            viewpoint,
            saved_material,
            saved_layer: Some(saved_layer),
            saved_mask: Some(saved_mask),
        })
    }

    pub fn scene(&mut self) -> &mut S {
        &mut *self.scene
    }

    /// Put the wing back on its own layer and restore the viewpoint mask.
    /// The marker material stays on until the guard is dropped.
    pub fn end_isolation(&mut self) {
        if let Some(layer) = self.saved_layer.take() {
            self.scene.set_layer(self.wing, layer);
        }
        if let Some(mask) = self.saved_mask.take() {
            self.scene.set_render_mask(self.viewpoint, mask);
        }
    }
}

impl<S: SceneGraph + Renderer> Drop for IsolationGuard<'_, S> {
    fn drop(&mut self) {
        self.end_isolation();
        self.scene.set_material(self.wing, self.saved_material);
    }
}

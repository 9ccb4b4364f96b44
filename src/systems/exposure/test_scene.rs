use bevy::prelude::Entity;
use std::collections::{HashMap, VecDeque};

use crate::components::{LayerMask, MaterialId, RenderLayer};
use crate::rendering::{PixelBuffer, Renderer, SceneGraph};
use crate::utils::RenderError;

/// Wing material, wing layer and viewpoint mask at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub material: MaterialId,
    pub layer: RenderLayer,
    pub mask: LayerMask,
}

/// In-memory scene with scripted render results.
///
/// Every render call pops the next queued frame and records which viewpoint
/// asked and what the wing looked like at that moment.
pub struct MockScene {
    pub wing: Entity,
    pub viewpoint: Entity,
    pub preview: Entity,
    materials: HashMap<Entity, MaterialId>,
    layers: HashMap<Entity, RenderLayer>,
    masks: HashMap<Entity, LayerMask>,
    frames: VecDeque<Result<PixelBuffer, RenderError>>,
    pub renders: Vec<(Entity, Snapshot)>,
}

impl MockScene {
    pub const MARKER: MaterialId = MaterialId(255);
    pub const MARKER_COLOR: [u8; 4] = [255, 0, 255, 255];
    const BODY: MaterialId = MaterialId(1);

    pub fn isolation() -> RenderLayer {
        RenderLayer::new(RenderLayer::MAX_INDEX).unwrap()
    }

    pub fn new() -> Self {
        let wing = Entity::from_raw(1);
        let viewpoint = Entity::from_raw(2);
        let preview = Entity::from_raw(3);
        Self {
            wing,
            viewpoint,
            preview,
            materials: HashMap::from([(wing, Self::BODY)]),
            layers: HashMap::from([(wing, RenderLayer::new(3).unwrap())]),
            masks: HashMap::from([
                (viewpoint, LayerMask::ALL.without(Self::isolation())),
                (preview, LayerMask::ALL),
            ]),
            frames: VecDeque::new(),
            renders: Vec::new(),
        }
    }

    /// Queue a 100 x 100 frame whose first `marker_pixels` pixels carry the marker.
    pub fn queue_marker_frame(&mut self, marker_pixels: u32) {
        let side = 100;
        let mut frame = PixelBuffer::filled(side, side, [0, 0, 0, 0]);
        for i in 0..marker_pixels.min(side * side) {
            frame.set_pixel(i % side, i / side, Self::MARKER_COLOR);
        }
        self.frames.push_back(Ok(frame));
    }

    pub fn queue_error(&mut self, err: RenderError) {
        self.frames.push_back(Err(err));
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            material: self.materials[&self.wing],
            layer: self.layers[&self.wing],
            mask: self.masks[&self.viewpoint],
        }
    }
}

impl Renderer for MockScene {
    fn render(&mut self, viewpoint: Entity) -> Result<PixelBuffer, RenderError> {
        let snapshot = self.snapshot();
        self.renders.push((viewpoint, snapshot));
        if !self.masks.contains_key(&viewpoint) {
            return Err(RenderError::MissingViewpoint(viewpoint));
        }
        self.frames
            .pop_front()
            .unwrap_or_else(|| Ok(PixelBuffer::filled(1, 1, [0, 0, 0, 0])))
    }

    fn render_mask(&self, viewpoint: Entity) -> Option<LayerMask> {
        self.masks.get(&viewpoint).copied()
    }

    fn set_render_mask(&mut self, viewpoint: Entity, mask: LayerMask) {
        self.masks.insert(viewpoint, mask);
    }
}

impl SceneGraph for MockScene {
    fn layer(&self, node: Entity) -> Option<RenderLayer> {
        self.layers.get(&node).copied()
    }

    fn set_layer(&mut self, node: Entity, layer: RenderLayer) {
        self.layers.insert(node, layer);
    }

    fn material(&self, node: Entity) -> Option<MaterialId> {
        self.materials.get(&node).copied()
    }

    fn set_material(&mut self, node: Entity, material: MaterialId) {
        self.materials.insert(node, material);
    }
}

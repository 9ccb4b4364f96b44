use bevy::prelude::*;

use crate::rendering::PixelBuffer;

/// Most recent frame rendered from a preview viewpoint, for display only.
#[derive(Resource, Debug, Clone, Default)]
pub struct PreviewFrame {
    pub viewpoint: Option<Entity>,
    pub frame: Option<PixelBuffer>,
    /// Number of preview frames stored so far
    pub frames_rendered: u64,
}

impl PreviewFrame {
    pub fn store(&mut self, viewpoint: Entity, frame: PixelBuffer) {
        self.viewpoint = Some(viewpoint);
        self.frame = Some(frame);
        self.frames_rendered += 1;
    }
}

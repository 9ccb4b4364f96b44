use nalgebra::{Isometry3, Vector3};

use crate::components::Viewpoint;

/// Camera parameters for a single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSetup {
    /// Camera-to-world pose; the camera looks down its local -Z axis with +Y up
    pub eye: Isometry3<f64>,
    pub vertical_fov_deg: f64,
    pub width: u32,
    pub height: u32,
}

impl ViewSetup {
    pub fn new(eye: Isometry3<f64>, viewpoint: &Viewpoint) -> Self {
        Self {
            eye,
            vertical_fov_deg: viewpoint.vertical_fov_deg,
            width: viewpoint.width,
            height: viewpoint.height,
        }
    }
}

/// One box to draw, in a flat opaque colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Body-to-world pose of the box centre
    pub pose: Isometry3<f64>,
    pub half_extents: Vector3<f64>,
    pub color: [u8; 4],
}

use bevy::prelude::*;
use nalgebra::{Isometry3, Point3};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform as SkiaTransform};

use super::buffer::PixelBuffer;
use super::types::{DrawItem, ViewSetup};
use crate::utils::{deg_to_rad, RenderError};

/// Backend that turns a list of boxes into pixels.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&mut self, view: &ViewSetup, items: &[DrawItem]) -> Result<PixelBuffer, RenderError>;
}

/// The rasterizer used by the exposure estimator.
#[derive(Resource)]
pub struct ActiveRasterizer {
    backend: Box<dyn Rasterizer>,
}

impl ActiveRasterizer {
    pub fn new(backend: impl Rasterizer + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn backend_mut(&mut self) -> &mut dyn Rasterizer {
        self.backend.as_mut()
    }
}

impl Default for ActiveRasterizer {
    fn default() -> Self {
        Self::new(SkiaRasterizer::default())
    }
}

// Corner i of a box has sign bits x = 4, y = 2, z = 1.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2], // -x
    [4, 6, 7, 5], // +x
    [0, 4, 5, 1], // -y
    [2, 3, 7, 6], // +y
    [0, 2, 6, 4], // -z
    [1, 5, 7, 3], // +z
];

/// CPU rasterizer drawing boxes with a pinhole projection and painter's
/// ordering. Anti-aliasing is off so every covered pixel carries the exact
/// material colour; the background stays fully transparent.
#[derive(Debug, Clone, Copy)]
pub struct SkiaRasterizer {
    /// Faces with any corner closer than this to the eye are skipped
    pub near_plane: f64,
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self { near_plane: 0.05 }
    }
}

struct Projector {
    world_to_camera: Isometry3<f64>,
    focal: f64,
    aspect: f64,
    width: f64,
    height: f64,
    near: f64,
}

impl Projector {
    fn new(view: &ViewSetup, near: f64) -> Self {
        Self {
            world_to_camera: view.eye.inverse(),
            focal: 1.0 / (deg_to_rad(view.vertical_fov_deg) / 2.0).tan(),
            aspect: view.width as f64 / view.height as f64,
            width: view.width as f64,
            height: view.height as f64,
            near,
        }
    }

    /// Screen position and depth of a world point, `None` behind the near plane.
    fn project(&self, point: &Point3<f64>) -> Option<(f32, f32, f64)> {
        let p = self.world_to_camera * point;
        let depth = -p.z;
        if depth < self.near {
            return None;
        }
        let x_ndc = self.focal / self.aspect * p.x / depth;
        let y_ndc = self.focal * p.y / depth;
        Some((
            ((x_ndc + 1.0) * 0.5 * self.width) as f32,
            ((1.0 - y_ndc) * 0.5 * self.height) as f32,
            depth,
        ))
    }
}

struct Face {
    depth: f64,
    color: [u8; 4],
    corners: [(f32, f32); 4],
}

fn box_corners(item: &DrawItem) -> [Point3<f64>; 8] {
    let h = item.half_extents;
    std::array::from_fn(|i| {
        let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
        item.pose * Point3::new(sign(4) * h.x, sign(2) * h.y, sign(1) * h.z)
    })
}

impl SkiaRasterizer {
    fn collect_faces(&self, projector: &Projector, items: &[DrawItem]) -> Vec<Face> {
        let mut faces = Vec::with_capacity(items.len() * BOX_FACES.len());
        for item in items {
            let corners = box_corners(item);
            'faces: for indices in BOX_FACES {
                let mut screen = [(0.0, 0.0); 4];
                let mut depth = 0.0;
                for (slot, &index) in indices.iter().enumerate() {
                    let Some((x, y, d)) = projector.project(&corners[index]) else {
                        continue 'faces;
                    };
                    screen[slot] = (x, y);
                    depth += d / 4.0;
                }
                faces.push(Face {
                    depth,
                    color: item.color,
                    corners: screen,
                });
            }
        }
        // Far to near
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        faces
    }
}

impl Rasterizer for SkiaRasterizer {
    fn rasterize(&mut self, view: &ViewSetup, items: &[DrawItem]) -> Result<PixelBuffer, RenderError> {
        let invalid = RenderError::InvalidTarget {
            width: view.width,
            height: view.height,
        };
        let mut canvas = Pixmap::new(view.width, view.height).ok_or(invalid.clone())?;

        let projector = Projector::new(view, self.near_plane);
        for face in self.collect_faces(&projector, items) {
            let path = {
                let mut pb = PathBuilder::new();
                let [first, rest @ ..] = face.corners;
                pb.move_to(first.0, first.1);
                for (x, y) in rest {
                    pb.line_to(x, y);
                }
                pb.close();
                pb.finish()
            };
            // Faces seen edge-on collapse to an empty path
            let Some(path) = path else { continue };

            let mut paint = Paint::default();
            let [r, g, b, a] = face.color;
            paint.set_color_rgba8(r, g, b, a);
            paint.anti_alias = false;

            canvas.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                SkiaTransform::identity(),
                None,
            );
        }

        PixelBuffer::from_rgba(view.width, view.height, canvas.data()).ok_or(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    const MARKER: [u8; 4] = [255, 0, 255, 255];
    const GREY: [u8; 4] = [200, 200, 200, 255];

    fn view(width: u32, height: u32) -> ViewSetup {
        ViewSetup {
            eye: Isometry3::identity(),
            vertical_fov_deg: 90.0,
            width,
            height,
        }
    }

    fn cuboid(at: Vector3<f64>, half: Vector3<f64>, color: [u8; 4]) -> DrawItem {
        DrawItem {
            pose: Isometry3::from_parts(Translation3::from(at), UnitQuaternion::identity()),
            half_extents: half,
            color,
        }
    }

    #[test]
    fn test_box_in_front_is_drawn() {
        let mut rasterizer = SkiaRasterizer::default();
        let item = cuboid(
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(1.0, 1.0, 0.1),
            MARKER,
        );
        let frame = rasterizer.rasterize(&view(64, 64), &[item]).unwrap();

        let covered = frame.count_matching(MARKER);
        assert!(covered > 50, "covered {}", covered);
        assert!(covered < 64 * 64);
        assert_eq!(frame.pixel(32, 32), Some(MARKER));
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_box_behind_camera_is_not_drawn() {
        let mut rasterizer = SkiaRasterizer::default();
        let item = cuboid(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(1.0, 1.0, 0.1),
            MARKER,
        );
        let frame = rasterizer.rasterize(&view(32, 32), &[item]).unwrap();
        assert_eq!(frame.count_matching(MARKER), 0);
    }

    #[test]
    fn test_nearer_box_occludes_farther_box() {
        let mut rasterizer = SkiaRasterizer::default();
        let far = cuboid(
            Vector3::new(0.0, 0.0, -6.0),
            Vector3::new(1.0, 1.0, 0.1),
            MARKER,
        );
        let alone = rasterizer
            .rasterize(&view(64, 64), &[far])
            .unwrap()
            .count_matching(MARKER);

        // Covers the right half of the far box
        let half = cuboid(
            Vector3::new(0.75, 0.0, -3.0),
            Vector3::new(0.5, 1.0, 0.1),
            GREY,
        );
        let partly = rasterizer
            .rasterize(&view(64, 64), &[half, far])
            .unwrap()
            .count_matching(MARKER);
        assert!(partly > 0 && partly < alone, "{} vs {}", partly, alone);

        let full = cuboid(
            Vector3::new(0.0, 0.0, -3.0),
            Vector3::new(2.0, 2.0, 0.1),
            GREY,
        );
        let hidden = rasterizer
            .rasterize(&view(64, 64), &[far, full])
            .unwrap()
            .count_matching(MARKER);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_zero_sized_target_is_an_error() {
        let mut rasterizer = SkiaRasterizer::default();
        assert_eq!(
            rasterizer.rasterize(&view(0, 10), &[]),
            Err(RenderError::InvalidTarget {
                width: 0,
                height: 10
            })
        );
    }
}

use bevy::prelude::*;

use super::isolation::IsolationGuard;
use crate::components::{
    Airfoil, ExposureMode, ExposureReading, ExposureSensor, MaterialId, RenderLayer,
};
use crate::rendering::{ActiveRasterizer, PixelBuffer, Renderer, SceneGraph, WorldScene};
use crate::resources::{ExposureConfig, MaterialPalette, PreviewFrame};
use crate::utils::ExposureError;

/// What to measure and how to recognise it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureProbe {
    pub wing: Entity,
    pub viewpoint: Entity,
    pub preview: Option<Entity>,
    pub marker: MaterialId,
    pub marker_color: [u8; 4],
    pub isolation_layer: RenderLayer,
}

/// Marker pixel counts from one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureSample {
    /// Marker pixels with the wing rendered alone
    pub total_pixels: u64,
    /// Marker pixels with the whole aircraft rendered
    pub visible_pixels: u64,
}

impl ExposureSample {
    /// `visible / total`, or 1.0 when the wing covers no pixels at all.
    pub fn fraction(&self) -> f64 {
        if self.total_pixels == 0 {
            return 1.0;
        }
        self.visible_pixels as f64 / self.total_pixels as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExposureReport {
    pub sample: ExposureSample,
    /// Frame from the preview viewpoint, if one is configured and rendered
    pub preview: Option<PixelBuffer>,
}

/// Measure how much of the wing's silhouette is visible from the probe's
/// viewpoint.
///
/// The wing is first rendered alone on the isolation layer to count every
/// pixel it covers, then rendered with the rest of the aircraft (still wearing
/// the marker) to count the pixels that survive occlusion. Material, layer and
/// render mask are back to their original values when this returns, whether
/// it succeeds or not. The preview render happens after restoration and never
/// affects the counts.
pub fn estimate_exposure<S: SceneGraph + Renderer>(
    scene: &mut S,
    probe: &ExposureProbe,
) -> Result<ExposureReport, ExposureError> {
    let sample = {
        let mut guard = IsolationGuard::acquire(
            scene,
            probe.wing,
            probe.viewpoint,
            probe.marker,
            probe.isolation_layer,
        )?;

        let total_pixels = guard
            .scene()
            .render(probe.viewpoint)?
            .count_matching(probe.marker_color);

        guard.end_isolation();

        let visible_pixels = guard
            .scene()
            .render(probe.viewpoint)?
            .count_matching(probe.marker_color);

        ExposureSample {
            total_pixels,
            visible_pixels,
        }
    };

    let preview = probe
        .preview
        .and_then(|preview| match scene.render(preview) {
            Ok(frame) => Some(frame),
            Err(err) => {
                debug!("Preview render from {:?} failed: {}", preview, err);
                None
            }
        });

    Ok(ExposureReport { sample, preview })
}

/// Measures exposure for every airfoil in [`ExposureMode::Measured`] and stores
/// it in its [`ExposureReading`].
///
/// Exclusive: the physics tick blocks on both renders, and no other system can
/// observe the wing while it is isolated.
pub fn exposure_system(world: &mut World) {
    let sensors: Vec<(Entity, ExposureSensor)> = world
        .query::<(Entity, &Airfoil)>()
        .iter(world)
        .filter_map(|(entity, airfoil)| match airfoil.exposure {
            ExposureMode::Measured(sensor) => Some((entity, sensor)),
            ExposureMode::Full => None,
        })
        .collect();
    if sensors.is_empty() {
        return;
    }

    // Missing marker configuration is reported once by setup validation
    let Some(config) = world.get_resource::<ExposureConfig>().cloned() else {
        return;
    };
    let Some(Ok(marker_color)) = world
        .get_resource::<MaterialPalette>()
        .map(|palette| palette.check_marker(config.marker))
    else {
        return;
    };

    // bevy 0.15 has no `try_resource_scope`; equivalent presence check + scope
    let measured = world.contains_resource::<ActiveRasterizer>().then(|| {
        world.resource_scope(|world, mut rasterizer: Mut<ActiveRasterizer>| {
            for (wing, sensor) in &sensors {
                let probe = ExposureProbe {
                    wing: *wing,
                    viewpoint: sensor.viewpoint,
                    preview: sensor.preview,
                    marker: config.marker,
                    marker_color,
                    isolation_layer: config.isolation_layer,
                };

                let outcome = {
                    let mut scene = WorldScene::new(world, rasterizer.backend_mut());
                    estimate_exposure(&mut scene, &probe)
                };

                let fraction = match outcome {
                    Ok(report) => {
                        trace!(
                            "Airfoil {:?}: {}/{} marker pixels visible",
                            wing,
                            report.sample.visible_pixels,
                            report.sample.total_pixels
                        );
                        if let (Some(preview), Some(frame)) = (sensor.preview, report.preview) {
                            if let Some(mut store) = world.get_resource_mut::<PreviewFrame>() {
                                store.store(preview, frame);
                            }
                        }
                        report.sample.fraction()
                    }
                    Err(ExposureError::MissingViewpoint(viewpoint)) => {
                        debug!(
                            "Viewpoint {:?} for airfoil {:?} is gone, using full exposure",
                            viewpoint, wing
                        );
                        1.0
                    }
                    Err(err) => {
                        warn!(
                            "Exposure measurement for airfoil {:?} failed, using full exposure: {}",
                            wing, err
                        );
                        1.0
                    }
                };

                if let Some(mut reading) = world.get_mut::<ExposureReading>(*wing) {
                    reading.0 = fraction;
                }
            }
        })
    });

    if measured.is_none() {
        warn!("No ActiveRasterizer resource, exposure not measured");
    }
}

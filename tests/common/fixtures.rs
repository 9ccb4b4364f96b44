use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use aerofoil::{
    components::{
        Airfoil, ColliderBounds, ExposureMode, ExposureSensor, LayerMask, MaterialId,
        MaterialSlot, PhysicsComponent, RenderLayer, Renderable, SpatialComponent, Viewpoint,
        VisibilityLayer,
    },
    utils::deg_to_rad,
};

use super::TestApp;

pub const AIRFRAME: MaterialId = MaterialId(1);
pub const STALL_RED: MaterialId = MaterialId(2);

/// Forward flight along +z at the default test speed.
pub fn cruise_velocity() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, 30.0)
}

/// Attitude that tilts the body +Y normal back so +z flow meets it at `aoa_deg`.
pub fn pitched(aoa_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(-deg_to_rad(aoa_deg), 0.0, 0.0)
}

/// Wing with 2 x 1 half-extents (area 8) at the origin, not rendered.
pub fn spawn_plain_wing(app: &mut TestApp, aoa_deg: f64) -> Entity {
    app.spawn((
        Airfoil::default(),
        SpatialComponent::default()
            .with_velocity(cruise_velocity())
            .with_attitude(pitched(aoa_deg)),
        PhysicsComponent::new(),
        ColliderBounds::new(2.0, 0.05, 1.0),
    ))
}

/// 64 x 64 viewpoint ten units above the origin, looking down.
pub fn spawn_overhead_viewpoint(app: &mut TestApp) -> Entity {
    app.spawn((
        Viewpoint::new(64, 64),
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ))
}

/// Rendered wing measured from `viewpoint`, flying level.
pub fn spawn_measured_wing(app: &mut TestApp, viewpoint: Entity, preview: Option<Entity>) -> Entity {
    let sensor = match preview {
        Some(preview) => ExposureSensor::new(viewpoint).with_preview(preview),
        None => ExposureSensor::new(viewpoint),
    };
    app.spawn((
        Airfoil::default().with_exposure(ExposureMode::Measured(sensor)),
        SpatialComponent::default()
            .with_velocity(cruise_velocity())
            .with_attitude(pitched(5.0)),
        PhysicsComponent::new(),
        ColliderBounds::new(2.0, 0.05, 1.0),
        Renderable::cuboid(2.0, 0.05, 1.0),
        MaterialSlot(AIRFRAME),
        VisibilityLayer(RenderLayer::DEFAULT),
    ))
}

/// Opaque airframe box between the overhead viewpoint and the wing.
pub fn spawn_occluder(app: &mut TestApp, center: Vector3<f64>, half_extents: Vector3<f64>) -> Entity {
    app.spawn((
        SpatialComponent::at_position(center),
        Renderable {
            half_extents,
        },
        MaterialSlot(AIRFRAME),
        VisibilityLayer::default(),
    ))
}

pub fn viewpoint_mask(app: &TestApp, viewpoint: Entity) -> LayerMask {
    app.get::<Viewpoint>(viewpoint).render_mask
}

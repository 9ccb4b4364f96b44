use bevy::prelude::*;

use crate::components::{
    Airfoil, ChaseCamera, ColliderBounds, ControlSurface, ExposureMode, ExposureSensor,
    HingeJoint, MaterialSlot, PhysicsComponent, Renderable, SpatialComponent, Viewpoint,
    VisibilityLayer,
};
use crate::resources::{ExposureConfig, MaterialPalette, StallDisplayConfig};
use crate::utils::SetupError;

const AIRFOIL: &str = "Airfoil";
const CONTROL_SURFACE: &str = "Control surface";
const CHASE_CAMERA: &str = "Chase camera";

fn require<T: Component>(
    world: &World,
    entity: Entity,
    role: &'static str,
    component: &'static str,
    errors: &mut Vec<SetupError>,
) {
    if world.get::<T>(entity).is_none() {
        errors.push(SetupError::MissingComponent {
            entity,
            role,
            component,
        });
    }
}

fn check_viewpoint(world: &World, wing: Entity, viewpoint: Entity, errors: &mut Vec<SetupError>) {
    match world.get::<Viewpoint>(viewpoint) {
        None => errors.push(SetupError::MissingReference {
            entity: wing,
            role: AIRFOIL,
            target: viewpoint,
            component: "Viewpoint",
        }),
        Some(settings) if settings.width == 0 || settings.height == 0 => {
            errors.push(SetupError::EmptyRenderTarget {
                entity: viewpoint,
                width: settings.width,
                height: settings.height,
            })
        }
        Some(_) => {}
    }
}

fn check_sensor(world: &World, wing: Entity, sensor: &ExposureSensor, errors: &mut Vec<SetupError>) {
    require::<MaterialSlot>(world, wing, AIRFOIL, "MaterialSlot", errors);
    require::<VisibilityLayer>(world, wing, AIRFOIL, "VisibilityLayer", errors);
    require::<Renderable>(world, wing, AIRFOIL, "Renderable", errors);

    check_viewpoint(world, wing, sensor.viewpoint, errors);
    if let Some(preview) = sensor.preview {
        check_viewpoint(world, wing, preview, errors);
    }
}

fn check_palette(world: &World, errors: &mut Vec<SetupError>) {
    let Some(palette) = world.get_resource::<MaterialPalette>() else {
        errors.push(SetupError::Palette(
            "no MaterialPalette resource".to_string(),
        ));
        return;
    };
    let marker = world
        .get_resource::<ExposureConfig>()
        .cloned()
        .unwrap_or_default()
        .marker;

    if let Err(msg) = palette.check_marker(marker) {
        errors.push(SetupError::Palette(msg));
    }
    if let Err(msg) = palette.check_opaque() {
        errors.push(SetupError::Palette(msg));
    }
}

/// Everything wrong with the airfoils and their exposure collaborators.
pub fn airfoil_setup_errors(world: &mut World) -> Vec<SetupError> {
    let airfoils: Vec<(Entity, ExposureMode)> = world
        .query::<(Entity, &Airfoil)>()
        .iter(world)
        .map(|(entity, airfoil)| (entity, airfoil.exposure))
        .collect();

    let world: &World = world;
    let mut errors = Vec::new();
    let mut any_measured = false;

    for (entity, exposure) in &airfoils {
        let entity = *entity;
        require::<SpatialComponent>(world, entity, AIRFOIL, "SpatialComponent", &mut errors);
        require::<PhysicsComponent>(world, entity, AIRFOIL, "PhysicsComponent", &mut errors);

        match world.get::<ColliderBounds>(entity) {
            None => errors.push(SetupError::MissingComponent {
                entity,
                role: AIRFOIL,
                component: "ColliderBounds",
            }),
            Some(bounds) if bounds.half_extents.x < 0.0 || bounds.half_extents.z < 0.0 => {
                errors.push(SetupError::NegativeExtents {
                    entity,
                    x: bounds.half_extents.x,
                    z: bounds.half_extents.z,
                })
            }
            Some(_) => {}
        }

        if let ExposureMode::Measured(sensor) = exposure {
            any_measured = true;
            check_sensor(world, entity, sensor, &mut errors);
        }
    }

    if any_measured {
        check_palette(world, &mut errors);
    }

    let display = world
        .get_resource::<StallDisplayConfig>()
        .filter(|_| !airfoils.is_empty());
    if let Some(display) = display {
        let palette = world.get_resource::<MaterialPalette>();
        for id in [display.normal, display.stalled] {
            if palette.and_then(|p| p.color(id)).is_none() {
                errors.push(SetupError::Palette(format!(
                    "stall display material {} is not in the palette",
                    id
                )));
            }
        }
    }

    errors
}

/// Control surfaces without a hinge to drive.
pub fn control_setup_errors(world: &mut World) -> Vec<SetupError> {
    world
        .query_filtered::<Entity, (With<ControlSurface>, Without<HingeJoint>)>()
        .iter(world)
        .map(|entity| SetupError::MissingComponent {
            entity,
            role: CONTROL_SURFACE,
            component: "HingeJoint",
        })
        .collect()
}

/// Chase cameras whose target is missing or has no spatial state.
pub fn chase_setup_errors(world: &mut World) -> Vec<SetupError> {
    let cameras: Vec<(Entity, Entity)> = world
        .query::<(Entity, &ChaseCamera)>()
        .iter(world)
        .map(|(entity, chase)| (entity, chase.target))
        .collect();

    let mut errors = Vec::new();
    for (entity, target) in cameras {
        require::<Transform>(world, entity, CHASE_CAMERA, "Transform", &mut errors);
        if world.get::<SpatialComponent>(target).is_none() {
            errors.push(SetupError::MissingReference {
                entity,
                role: CHASE_CAMERA,
                target,
                component: "SpatialComponent",
            });
        }
    }
    errors
}

fn report(world: &mut World, errors: Vec<SetupError>) {
    if errors.is_empty() {
        return;
    }
    for err in &errors {
        error!("Setup error: {}", err);
    }
    world.send_event(AppExit::error());
}

pub fn validate_airfoil_setup(world: &mut World) {
    let errors = airfoil_setup_errors(world);
    if errors.is_empty() {
        info!("Airfoil setup validated");
    }
    report(world, errors);
}

pub fn validate_control_setup(world: &mut World) {
    let errors = control_setup_errors(world);
    report(world, errors);
}

pub fn validate_chase_setup(world: &mut World) {
    let errors = chase_setup_errors(world);
    report(world, errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{MaterialId, RenderLayer};
    use crate::resources::AeroConfig;
    use pretty_assertions::assert_eq;

    fn world_with_palette() -> World {
        let mut world = World::new();
        let config = AeroConfig::default();
        world.insert_resource(config.palette());
        world.insert_resource(config.exposure.clone());
        world
    }

    fn spawn_wing(world: &mut World, exposure: ExposureMode) -> Entity {
        world
            .spawn((
                Airfoil::default().with_exposure(exposure),
                SpatialComponent::default(),
                PhysicsComponent::new(),
                ColliderBounds::new(2.0, 0.1, 0.5),
                Renderable::cuboid(2.0, 0.1, 0.5),
                MaterialSlot(MaterialId(1)),
                VisibilityLayer(RenderLayer::DEFAULT),
            ))
            .id()
    }

    #[test]
    fn test_complete_setup_has_no_errors() {
        let mut world = world_with_palette();
        let viewpoint = world.spawn((Viewpoint::new(64, 48), Transform::default())).id();
        spawn_wing(&mut world, ExposureMode::Measured(ExposureSensor::new(viewpoint)));
        spawn_wing(&mut world, ExposureMode::Full);

        assert!(airfoil_setup_errors(&mut world).is_empty());
    }

    #[test]
    fn test_missing_and_empty_viewpoints() {
        let mut world = world_with_palette();
        let empty = world.spawn(Viewpoint::new(0, 48)).id();
        let gone = world.spawn_empty().id();
        world.despawn(gone);

        let wing = spawn_wing(
            &mut world,
            ExposureMode::Measured(ExposureSensor::new(gone).with_preview(empty)),
        );

        assert_eq!(
            airfoil_setup_errors(&mut world),
            vec![
                SetupError::MissingReference {
                    entity: wing,
                    role: AIRFOIL,
                    target: gone,
                    component: "Viewpoint",
                },
                SetupError::EmptyRenderTarget {
                    entity: empty,
                    width: 0,
                    height: 48,
                },
            ]
        );
    }

    #[test]
    fn test_measured_wing_needs_scene_components() {
        let mut world = world_with_palette();
        let viewpoint = world.spawn(Viewpoint::new(32, 32)).id();
        let wing = world
            .spawn((
                Airfoil::default()
                    .with_exposure(ExposureMode::Measured(ExposureSensor::new(viewpoint))),
                SpatialComponent::default(),
                PhysicsComponent::new(),
                ColliderBounds::new(1.0, 0.1, -1.0),
            ))
            .id();

        let errors = airfoil_setup_errors(&mut world);
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[0],
            SetupError::NegativeExtents {
                entity: wing,
                x: 1.0,
                z: -1.0
            }
        );
        assert!(errors.contains(&SetupError::MissingComponent {
            entity: wing,
            role: AIRFOIL,
            component: "MaterialSlot",
        }));
    }

    #[test]
    fn test_marker_colour_clash_is_reported() {
        let mut world = world_with_palette();
        world
            .resource_mut::<MaterialPalette>()
            .insert(MaterialId(7), [255, 0, 255, 255]);
        let viewpoint = world.spawn(Viewpoint::new(16, 16)).id();
        spawn_wing(&mut world, ExposureMode::Measured(ExposureSensor::new(viewpoint)));

        let errors = airfoil_setup_errors(&mut world);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], SetupError::Palette(_)));
    }

    #[test]
    fn test_full_exposure_ignores_palette() {
        let mut world = World::new();
        spawn_wing(&mut world, ExposureMode::Full);
        assert!(airfoil_setup_errors(&mut world).is_empty());
    }

    #[test]
    fn test_control_surface_without_hinge() {
        let mut world = World::new();
        let surface = world.spawn(ControlSurface::new("Pitch", 30.0)).id();
        world.spawn((ControlSurface::new("Roll", 20.0), HingeJoint::default()));

        assert_eq!(
            control_setup_errors(&mut world),
            vec![SetupError::MissingComponent {
                entity: surface,
                role: CONTROL_SURFACE,
                component: "HingeJoint",
            }]
        );
    }

    #[test]
    fn test_chase_camera_target_must_have_spatial() {
        let mut world = World::new();
        let scenery = world.spawn_empty().id();
        let camera = world
            .spawn((ChaseCamera::new(scenery, 5.0), Transform::default()))
            .id();

        assert_eq!(
            chase_setup_errors(&mut world),
            vec![SetupError::MissingReference {
                entity: camera,
                role: CHASE_CAMERA,
                target: scenery,
                component: "SpatialComponent",
            }]
        );
    }
}

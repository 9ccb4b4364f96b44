use bevy::log::LogPlugin;
use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use std::env;
use std::path::PathBuf;

use aerofoil::{
    components::{
        AeroState, Airfoil, ChaseCamera, ColliderBounds, ControlSurface, ExposureMode,
        ExposureSensor, HingeJoint, LayerMask, MaterialId, MaterialSlot, PhysicsComponent,
        Renderable, SpatialComponent, Viewpoint, VisibilityLayer,
    },
    plugins::{AerodynamicsPlugin, ChaseCameraPlugin, ControlSurfacePlugin},
    resources::{AeroConfig, ControlInputs, PreviewFrame},
    utils::deg_to_rad,
};

/// Rigid offset of a part from the glider's reference point, body frame.
#[derive(Component)]
struct Mount(Vector3<f64>);

struct DemoArgs {
    config: Option<PathBuf>,
    ticks: u32,
    preview: Option<PathBuf>,
}

fn parse_args() -> Result<DemoArgs, String> {
    let mut args = DemoArgs {
        config: None,
        ticks: 200,
        preview: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("{} expects a value", flag))
        };
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--ticks" => {
                args.ticks = value()?
                    .parse()
                    .map_err(|e| format!("--ticks: {}", e))?
            }
            "--preview" => args.preview = Some(PathBuf::from(value()?)),
            other => return Err(format!("unknown argument {}", other)),
        }
    }
    Ok(args)
}

fn spawn_glider(mut commands: Commands, config: Res<AeroConfig>) {
    let isolation = config.exposure.isolation_layer;
    let airframe = MaterialId(1);
    let velocity = Vector3::new(0.0, 0.0, 30.0);

    let body = |offset: Vector3<f64>| {
        (
            Mount(offset),
            SpatialComponent::at_position(offset).with_velocity(velocity),
            MaterialSlot(airframe),
            VisibilityLayer::default(),
        )
    };

    // Fuselage, partly in front of the wing root
    commands.spawn((
        body(Vector3::new(0.0, 0.3, 0.5)),
        Renderable::cuboid(0.4, 0.4, 3.0),
        Name::new("Fuselage"),
    ));

    let chase_view = commands.spawn_empty().id();
    let preview = commands.spawn_empty().id();

    let sensor = ExposureSensor::new(chase_view).with_preview(preview);
    let wing = commands
        .spawn((
            body(Vector3::zeros()),
            Airfoil::from_config(&config.airfoil).with_exposure(ExposureMode::Measured(sensor)),
            PhysicsComponent::new(),
            ColliderBounds::new(3.0, 0.05, 0.6),
            Renderable::cuboid(3.0, 0.05, 0.6),
            Name::new("Main wing"),
        ))
        .id();

    let views = [(chase_view, 12.0, 160, 120), (preview, 25.0, 320, 240)];
    for (camera, distance, width, height) in views {
        commands.entity(camera).insert((
            ChaseCamera::new(wing, distance),
            Viewpoint::new(width, height).with_mask(LayerMask::ALL.without(isolation)),
            Transform::default(),
        ));
    }

    commands.spawn((
        body(Vector3::new(0.0, 0.0, -3.5)),
        Renderable::cuboid(1.0, 0.05, 0.3),
        ControlSurface::new("Pitch", 30.0),
        HingeJoint::default(),
        Name::new("Elevator"),
    ));

    info!("Glider spawned, wing {:?} measured from {:?}", wing, chase_view);
}

/// Stand-in for the external rigid-body solver: pitch the glider through a
/// sweep and carry every part along at constant velocity.
fn move_glider(world: &mut World, tick: u32, ticks: u32, dt: f64) {
    let progress = tick as f64 / ticks.max(1) as f64;
    let pitch_deg = -20.0 + 40.0 * progress;
    let attitude = UnitQuaternion::from_euler_angles(-deg_to_rad(pitch_deg), 0.0, 0.0);
    let origin = Vector3::new(0.0, 0.0, 30.0) * dt * tick as f64;

    let mut parts = world.query::<(&Mount, &mut SpatialComponent)>();
    for (mount, mut spatial) in parts.iter_mut(world) {
        spatial.attitude = attitude;
        spatial.position = origin + attitude * mount.0;
    }

    world
        .resource_mut::<ControlInputs>()
        .set_axis("Pitch", (progress * std::f64::consts::TAU).sin() as f32);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => AeroConfig::from_file(path)?,
        None => AeroConfig::default(),
    };
    let dt = 1.0 / config.physics_rate_hz;

    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .add_plugins(AerodynamicsPlugin::with_config(config)?)
        .add_plugins(ControlSurfacePlugin)
        .add_plugins(ChaseCameraPlugin)
        .add_systems(Startup, spawn_glider);

    for tick in 0..args.ticks {
        move_glider(app.world_mut(), tick, args.ticks, dt);

        // Frame tick (startup and validation on the first), then one physics tick
        app.update();
        if let Some(exit) = app.should_exit() {
            error!("Stopping: {:?}", exit);
            return Err("scene setup is invalid".into());
        }
        app.world_mut().run_schedule(FixedUpdate);

        let world = app.world_mut();
        let mut wings = world.query_filtered::<&AeroState, With<Airfoil>>();
        for state in wings.iter(world) {
            info!("tick {} {}", tick, serde_json::to_string(state)?);
        }
        let mut hinges = world.query::<(&Name, &HingeJoint)>();
        for (name, hinge) in hinges.iter(world) {
            debug!("tick {} {} target {:.2}", tick, name, hinge.target_position);
        }
    }

    if let Some(path) = args.preview {
        match &app.world().resource::<PreviewFrame>().frame {
            Some(frame) => {
                frame.to_image().save(&path)?;
                info!("Preview written to {}", path.display());
            }
            None => warn!("No preview frame was rendered"),
        }
    }

    Ok(())
}

use bevy::prelude::*;

use aerofoil::{
    plugins::{AerodynamicsPlugin, ChaseCameraPlugin, ControlSurfacePlugin},
    rendering::{ActiveRasterizer, Rasterizer},
    resources::AeroConfig,
};

/// Builder for a headless app with the flight plugins. No time plugin is
/// installed, so physics ticks only run when asked for.
pub struct TestAppBuilder {
    config: AeroConfig,
    controls: bool,
    chase_camera: bool,
    rasterizer: Option<ActiveRasterizer>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: AeroConfig::default(),
            controls: false,
            chase_camera: false,
            rasterizer: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AeroConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_controls(mut self) -> Self {
        self.controls = true;
        self
    }

    pub fn with_chase_camera(mut self) -> Self {
        self.chase_camera = true;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.rasterizer = Some(ActiveRasterizer::new(rasterizer));
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        if let Some(rasterizer) = self.rasterizer {
            app.insert_resource(rasterizer);
        }
        app.add_plugins(
            AerodynamicsPlugin::with_config(self.config).expect("test config should be valid"),
        );
        if self.controls {
            app.add_plugins(ControlSurfacePlugin);
        }
        if self.chase_camera {
            app.add_plugins(ChaseCameraPlugin);
        }

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.app.world_mut().spawn(bundle).id()
    }

    /// First frame: startup schedules and setup validation.
    pub fn start(&mut self) {
        self.app.update();
    }

    /// One frame tick (control surfaces).
    pub fn frame(&mut self) {
        self.app.update();
    }

    /// One physics tick.
    pub fn physics_tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_physics_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.physics_tick();
        }
    }

    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("entity should have the component")
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Mut<T> {
        self.app
            .world_mut()
            .get_mut::<T>(entity)
            .expect("entity should have the component")
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn exit_requested(&self) -> bool {
        self.app.should_exit().is_some()
    }
}

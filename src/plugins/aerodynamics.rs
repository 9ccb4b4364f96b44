use bevy::prelude::*;
use std::path::Path;

use super::staging::{configure_flight_sets, FlightSet};
use crate::rendering::ActiveRasterizer;
use crate::resources::{AeroConfig, Atmosphere, PreviewFrame};
use crate::systems::{
    airfoil_force_system, exposure_system, stall_display_system, validate_airfoil_setup,
};
use crate::utils::ConfigError;

/// Airfoil forces, exposure measurement and stall display on the physics tick.
pub struct AerodynamicsPlugin {
    config: AeroConfig,
}

impl AerodynamicsPlugin {
    pub fn new() -> Self {
        Self {
            config: AeroConfig::default(),
        }
    }

    pub fn with_config(config: AeroConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            config: AeroConfig::from_file(path)?,
        })
    }

    pub fn config(&self) -> &AeroConfig {
        &self.config
    }
}

impl Default for AerodynamicsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        info!(
            "Aerodynamics at {} Hz, air density {}",
            config.physics_rate_hz, config.atmosphere.density
        );

        app.insert_resource(Atmosphere::new(&config.atmosphere))
            .insert_resource(config.exposure.clone())
            .insert_resource(config.palette())
            .insert_resource(config.clone())
            .insert_resource(Time::<Fixed>::from_hz(config.physics_rate_hz))
            .init_resource::<PreviewFrame>()
            .init_resource::<ActiveRasterizer>()
            .add_event::<AppExit>();

        configure_flight_sets(app);

        app.add_systems(PostStartup, validate_airfoil_setup).add_systems(
            FixedUpdate,
            (
                exposure_system.in_set(FlightSet::Exposure),
                airfoil_force_system.in_set(FlightSet::Forces),
            ),
        );

        if let Some(display) = config.stall_display {
            app.insert_resource(display).add_systems(
                FixedUpdate,
                stall_display_system.in_set(FlightSet::Visualization),
            );
        }
    }
}

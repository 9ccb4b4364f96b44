use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::environment::AtmosphereConfig;
use super::render::{default_materials, ExposureConfig, MaterialConfig, StallDisplayConfig};
use crate::resources::MaterialPalette;
use crate::utils::{
    ConfigError, DEFAULT_PHYSICS_RATE_HZ, DEFAULT_STALL_THRESHOLD_DEG,
    DEFAULT_TURBULENCE_THRESHOLD_DEG,
};

/// Regime thresholds applied to airfoils built from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilConfig {
    pub stall_threshold_deg: f64,
    pub turbulence_threshold_deg: f64,
}

impl Default for AirfoilConfig {
    fn default() -> Self {
        Self {
            stall_threshold_deg: DEFAULT_STALL_THRESHOLD_DEG,
            turbulence_threshold_deg: DEFAULT_TURBULENCE_THRESHOLD_DEG,
        }
    }
}

/// Session-wide configuration of the flight model. Set once at start-up.
///
/// ```yaml
/// atmosphere:
///   density: 0.07962
/// airfoil:
///   stall_threshold_deg: 12.0
///   turbulence_threshold_deg: 10.0
/// exposure:
///   marker: 255
///   isolation_layer: 31
/// stall_display:
///   normal: 1
///   stalled: 2
/// physics_rate_hz: 50.0
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    pub atmosphere: AtmosphereConfig,
    pub airfoil: AirfoilConfig,
    pub exposure: ExposureConfig,
    /// Stall visualization is enabled when present
    pub stall_display: Option<StallDisplayConfig>,
    pub materials: Vec<MaterialConfig>,
    pub physics_rate_hz: f64,
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            atmosphere: AtmosphereConfig::default(),
            airfoil: AirfoilConfig::default(),
            exposure: ExposureConfig::default(),
            stall_display: None,
            materials: default_materials(),
            physics_rate_hz: DEFAULT_PHYSICS_RATE_HZ,
        }
    }
}

impl AeroConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AeroConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_stall_display(mut self, display: StallDisplayConfig) -> Self {
        self.stall_display = Some(display);
        self
    }

    pub fn palette(&self) -> MaterialPalette {
        MaterialPalette::from_configs(&self.materials)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        let density = self.atmosphere.density;
        if !density.is_finite() || density <= 0.0 {
            return invalid(format!("air density must be positive, got {}", density));
        }

        for (name, value) in [
            ("stall_threshold_deg", self.airfoil.stall_threshold_deg),
            (
                "turbulence_threshold_deg",
                self.airfoil.turbulence_threshold_deg,
            ),
        ] {
            if !(0.0..=90.0).contains(&value) {
                return invalid(format!("{} must lie in [0, 90], got {}", name, value));
            }
        }

        if !self.physics_rate_hz.is_finite() || self.physics_rate_hz <= 0.0 {
            return invalid(format!(
                "physics_rate_hz must be positive, got {}",
                self.physics_rate_hz
            ));
        }

        let palette = self.palette();
        if palette.len() != self.materials.len() {
            return invalid("material ids must be unique".to_string());
        }
        palette.check_opaque().or_else(invalid)?;
        palette
            .check_marker(self.exposure.marker)
            .map(|_| ())
            .or_else(invalid)?;

        if let Some(display) = &self.stall_display {
            for id in [display.normal, display.stalled] {
                if palette.color(id).is_none() {
                    return invalid(format!("stall display uses unknown {}", id));
                }
            }
        }

        Ok(())
    }
}

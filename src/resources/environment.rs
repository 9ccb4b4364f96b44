use bevy::prelude::*;

use super::config::environment::AtmosphereConfig;

/// Constant-density atmosphere shared by every airfoil.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub density: f64,
}

impl Atmosphere {
    pub fn new(config: &AtmosphereConfig) -> Self {
        Self {
            density: config.density,
        }
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::new(&AtmosphereConfig::default())
    }
}

use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_AIR_DENSITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Constant air density for the session [lb/ft^3 by default]
    pub density: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_AIR_DENSITY,
        }
    }
}

pub mod aerodynamics;
pub mod environment;
pub mod render;

pub use aerodynamics::{AeroConfig, AirfoilConfig};
pub use environment::AtmosphereConfig;
pub use render::{default_materials, ExposureConfig, MaterialConfig, StallDisplayConfig};

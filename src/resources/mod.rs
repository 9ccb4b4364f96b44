pub mod config;
mod environment;
mod input;
mod palette;
mod preview;

pub use config::{
    AeroConfig, AirfoilConfig, AtmosphereConfig, ExposureConfig, MaterialConfig,
    StallDisplayConfig,
};
pub use environment::Atmosphere;
pub use input::ControlInputs;
pub use palette::MaterialPalette;
pub use preview::PreviewFrame;

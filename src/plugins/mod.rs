mod aerodynamics;
mod camera;
mod control_surface;
mod staging;

pub use aerodynamics::AerodynamicsPlugin;
pub use camera::ChaseCameraPlugin;
pub use control_surface::ControlSurfacePlugin;
pub use staging::{configure_flight_sets, FlightSet};

mod control_surface;

pub use control_surface::control_surface_system;

pub mod aerodynamics;
mod camera;
mod controller;
pub mod exposure;
mod validation;

pub use aerodynamics::{
    airfoil_force_system, angle_of_attack_deg, calculate_airfoil_force, calculate_coefficients,
    stall_display_system, AeroCoefficients, AirfoilInput, FlowRegime,
};
pub use camera::{chase_camera_system, chase_transform};
pub use controller::control_surface_system;
pub use exposure::{
    estimate_exposure, exposure_system, ExposureProbe, ExposureReport, ExposureSample,
    IsolationGuard,
};
pub use validation::{
    airfoil_setup_errors, chase_setup_errors, control_setup_errors, validate_airfoil_setup,
    validate_chase_setup, validate_control_setup,
};

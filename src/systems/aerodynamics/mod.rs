mod coefficients;
mod force_calculator;
mod stall_display;

pub use coefficients::{angle_of_attack_deg, calculate_coefficients, AeroCoefficients, FlowRegime};
pub use force_calculator::{airfoil_force_system, calculate_airfoil_force, AirfoilInput};
pub use stall_display::stall_display_system;

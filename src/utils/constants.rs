pub const DEFAULT_AIR_DENSITY: f64 = 0.07962; // lb/ft^3
pub const DEFAULT_STALL_THRESHOLD_DEG: f64 = 12.0; // deg
pub const DEFAULT_TURBULENCE_THRESHOLD_DEG: f64 = 10.0; // deg
pub const DEFAULT_PHYSICS_RATE_HZ: f64 = 50.0; // Hz

// Piecewise coefficient model
pub const PRE_STALL_DEG_PER_CL: f64 = 10.0; // Cl = aoa / 10 below stall
pub const STALLED_LIFT_GAIN: f64 = 1.2; // Cl = 1.2 sin(2 aoa) once stalled
pub const TURBULENT_DRAG_GAIN: f64 = 2.0; // Cd = |2 sin(aoa)| once turbulent

/// Below this norm a force direction is treated as undefined.
pub const DIRECTION_EPSILON: f64 = 1e-12;

/// Two vectors whose norm product falls below this have no defined angle.
pub const ANGLE_EPSILON: f64 = 1e-15;

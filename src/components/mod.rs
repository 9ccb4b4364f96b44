pub mod aerodynamics;
pub mod camera;
pub mod controller;
pub mod physics;
pub mod render;
pub mod spatial;

pub use aerodynamics::{
    AeroState, Airfoil, ColliderBounds, ExposureMode, ExposureReading, ExposureSensor,
};
pub use camera::ChaseCamera;
pub use controller::{ControlSurface, HingeJoint};
pub use physics::{Force, ForceCategory, PhysicsComponent};
pub use render::{
    LayerMask, MaterialId, MaterialSlot, RenderLayer, Renderable, Viewpoint, VisibilityLayer,
};
pub use spatial::SpatialComponent;

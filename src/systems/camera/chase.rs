use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ChaseCamera, SpatialComponent};
use crate::utils::vec3_from_vector;

/// Camera pose `distance` ahead of the body along its velocity, looking back
/// at the body with +Y up. `None` when the body is not moving.
pub fn chase_transform(
    position: &Vector3<f64>,
    velocity: &Vector3<f64>,
    distance: f64,
) -> Option<Transform> {
    let direction = velocity.try_normalize(0.0)?;
    let eye = position + direction * distance;

    Some(
        Transform::from_translation(vec3_from_vector(&eye))
            .looking_at(vec3_from_vector(position), Vec3::Y),
    )
}

pub fn chase_camera_system(
    targets: Query<&SpatialComponent>,
    mut cameras: Query<(&ChaseCamera, &mut Transform)>,
) {
    for (chase, mut transform) in cameras.iter_mut() {
        // Despawned target: hold the last pose
        let Ok(target) = targets.get(chase.target) else {
            continue;
        };
        if let Some(pose) = chase_transform(&target.position, &target.velocity, chase.distance) {
            *transform = pose;
        }
    }
}

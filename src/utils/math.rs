use bevy::prelude::{Quat, Transform, Vec3};
use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion, Vector3};
use std::f64::consts::PI;

use super::constants::ANGLE_EPSILON;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Unsigned angle between two vectors in degrees, in [0, 180].
///
/// Returns 0 when either vector has (near) zero length.
pub fn angle_between_deg(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denominator = (a.norm_squared() * b.norm_squared()).sqrt();
    if denominator < ANGLE_EPSILON {
        return 0.0;
    }
    let cos_angle = (a.dot(b) / denominator).clamp(-1.0, 1.0);
    rad_to_deg(cos_angle.acos())
}

#[inline]
pub fn vec3_from_vector(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

#[inline]
pub fn vector_from_vec3(v: Vec3) -> Vector3<f64> {
    Vector3::new(v.x as f64, v.y as f64, v.z as f64)
}

pub fn unit_quaternion_from_quat(q: Quat) -> UnitQuaternion<f64> {
    UnitQuaternion::from_quaternion(Quaternion::new(
        q.w as f64, q.x as f64, q.y as f64, q.z as f64,
    ))
}

/// Camera-to-world pose of a Bevy transform. Scale is ignored.
pub fn isometry_from_transform(transform: &Transform) -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::from(vector_from_vec3(transform.translation)),
        unit_quaternion_from_quat(transform.rotation),
    )
}

//! Math utilities and types
//!
//! Thin aliases over `nalgebra` so script-facing signatures match the host's
//! transform storage.

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 2D point type (UI-space)
pub type Point2 = nalgebra::Point2<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Check that every component of a 3D vector is finite
pub fn is_finite_vec3(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Check that every component of a rotation quaternion is finite
pub fn is_finite_quat(q: &Quat) -> bool {
    q.coords.iter().all(|c| c.is_finite())
}

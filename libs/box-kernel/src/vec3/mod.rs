//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep vector creation readable while avoiding direct
//! dependencies on `glam` from higher layers.

pub use glam::DVec3 as Vec3;

/// Creates a zero vector using `glam::DVec3`.
///
/// # Examples
/// ```
/// use box_kernel::Vec3;
/// let v = box_kernel::vec3::zero();
/// assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
/// ```
pub fn zero() -> Vec3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Counts the axes on which `a` and `b` differ.
///
/// Comparison is exact: box corners are built from the same three edge
/// lengths, so shared coordinates are bit-identical.
///
/// # Examples
/// ```
/// use box_kernel::vec3::{differing_axes, Vec3};
/// let a = Vec3::new(0.0, 2.0, 0.0);
/// let b = Vec3::new(4.0, 2.0, 0.0);
/// assert_eq!(differing_axes(a, b), 1);
/// ```
pub fn differing_axes(a: Vec3, b: Vec3) -> usize {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .filter(|(p, q)| p != q)
        .count()
}

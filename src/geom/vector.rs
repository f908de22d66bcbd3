//! 2D vector algebra over f64
//!
//! Addition, subtraction, scaling and the dot product come straight from
//! `DVec2`. The helpers here spell out the remaining operations with their
//! exact numeric behavior: nothing is clamped and a zero vector normalizes to
//! NaN instead of silently becoming zero.

use glam::DVec2;

/// Free vector (displacement, direction)
pub type Vector = DVec2;

/// Position. Same representation as [`Vector`].
pub type Point = DVec2;

/// Euclidean length
#[inline]
pub fn magnitude(v: Vector) -> f64 {
    v.dot(v).sqrt()
}

/// Unit vector pointing along `v`
///
/// Undefined for the zero vector: the result is NaN in both components.
#[inline]
pub fn unit(v: Vector) -> Vector {
    v / magnitude(v)
}

/// Left perpendicular, `(-y, x)`
///
/// Rotates by +90° and preserves length, so it is a unit normal only when `v`
/// is already a unit vector.
#[inline]
pub fn perp(v: Vector) -> Vector {
    Vector::new(-v.y, v.x)
}

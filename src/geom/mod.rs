//! Geometry value types
//!
//! Vectors are `glam::DVec2`; shapes validate themselves on construction so
//! the collision code never sees a zero-length segment or a zero radius.

pub mod shapes;
pub mod vector;

pub use shapes::{Circle, Segment};
pub use vector::{Point, Vector, magnitude, perp, unit};

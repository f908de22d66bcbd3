//! Swept collision between a moving circle and a static segment
//!
//! Everything here is a pure function of its inputs:
//! - No state is kept between calls
//! - No allocation
//! - Degenerate arithmetic shows up as NaN and is rejected by range checks

pub mod classify;
pub mod primitives;
pub mod response;

pub use classify::{Collision, CollisionType, Contacts, classify};
pub use primitives::{
    circle_segment_intersection, nearest_endpoint, point_on_circle, point_on_line,
    projection_parameter, segment_intersection,
};
pub use response::{StepOutcome, contact_normal, reflect, resolve_step};

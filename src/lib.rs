//! Sweep Collide - swept collision between a moving circle and a static segment
//!
//! Core modules:
//! - `geom`: Vector algebra and the validated `Circle` / `Segment` shapes
//! - `sweep`: Geometric primitives, the two-phase collision classifier and the
//!   reflection response
//! - `scenario`: Serializable description of a single simulation step
//! - `error`: Construction and loading errors

pub mod error;
pub mod geom;
pub mod scenario;
pub mod sweep;

pub use error::{GeometryError, ScenarioError};
pub use geom::{Circle, Point, Segment, Vector};
pub use scenario::Scenario;
pub use sweep::{Collision, CollisionType, Contacts, StepOutcome, classify, resolve_step};

/// Numeric tolerances shared by the geometric tests
pub mod consts {
    /// Absolute slack when checking that an intersection candidate lies
    /// within a segment's coordinate bounds
    ///
    /// Assumes coordinates well below ~1e7 in magnitude. Beyond that one ulp
    /// exceeds the slack and the check degrades to an exact comparison.
    pub const CONTAINMENT_EPSILON: f64 = 1e-9;

    /// Distance, in world units, a circle-vs-segment contact may lie before the
    /// start or past the end of the swept path. A contact reached exactly at
    /// the end of the step must still count when the displacement was rounded
    /// to a few decimal digits.
    pub const CONTACT_DISTANCE_TOLERANCE: f64 = 1e-5;
}

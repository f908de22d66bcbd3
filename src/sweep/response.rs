//! Collision response by reflection
//!
//! The circle travels until it touches, then the rest of the step is mirrored
//! about the contact normal. Speed is preserved; there is no restitution or
//! friction.

use serde::Serialize;

use super::classify::{Collision, classify};
use crate::geom::{Circle, Point, Segment, Vector, magnitude, unit};

/// Circle state after one resolved step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepOutcome {
    pub collision: Collision,
    /// Circle center at the end of the step
    pub center: Point,
    /// Unit direction of travel leaving the step; zero for a zero step
    pub heading: Vector,
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vector, normal: Vector) -> Vector {
    v - 2.0 * v.dot(normal) * normal
}

/// Surface normal to reflect about for `collision`
///
/// Interior hits use the segment's normal. Endpoint hits use the circle's
/// radius through the contact point, i.e. the tangent plane at the corner.
pub fn contact_normal(collision: &Collision, circle: &Circle, segment: &Segment) -> Option<Vector> {
    match collision {
        Collision::None => None,
        Collision::Between(_) => Some(segment.normal()),
        Collision::EndPoint(contacts) => Some(unit(contacts.circle - circle.center())),
    }
}

/// Move `circle` by `step` against `segment`, bouncing off it on contact
pub fn resolve_step(circle: &Circle, step: Vector, segment: &Segment) -> StepOutcome {
    let collision = classify(circle, step, segment);
    let speed = magnitude(step);

    if speed == 0.0 {
        return StepOutcome {
            collision,
            center: circle.center(),
            heading: Vector::ZERO,
        };
    }

    let (Some(contacts), Some(normal)) = (
        collision.contacts(),
        contact_normal(&collision, circle, segment),
    ) else {
        return StepOutcome {
            collision,
            center: circle.center() + step,
            heading: step / speed,
        };
    };

    // A grazing contact can sit slightly past the end of the step
    let travel = contacts.segment - contacts.circle;
    let remaining = step * ((speed - magnitude(travel)) / speed).max(0.0);
    let center = circle.center() + travel + reflect(remaining, normal);
    log::debug!(
        "{} contact, travelled {:.6} of {:.6} before reflecting",
        collision.kind().as_str(),
        magnitude(travel),
        speed
    );

    StepOutcome {
        collision,
        center,
        heading: unit(reflect(step, normal)),
    }
}

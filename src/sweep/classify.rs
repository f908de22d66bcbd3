//! Two-phase swept collision classifier
//!
//! The tricky part: a circle moving across a step can meet a segment either on
//! its flat interior or on one of its endpoints, and no single ray test gets
//! both right.
//!
//! - Interior: the point of the circle facing the segment's line is swept
//!   forward along the displacement and intersected with the segment.
//! - Endpoint: the nearest endpoint is swept *backward* along the displacement
//!   and intersected with the stationary circle.
//!
//! The interior test runs first; the endpoint test only runs when it fails.
//! A zero displacement sweeps nothing, so it falls back to a static overlap
//! test against the closest point of the segment.

use serde::{Deserialize, Serialize};

use super::primitives::{
    circle_segment_intersection, nearest_endpoint, point_on_circle, point_on_line,
    projection_parameter, segment_intersection,
};
use crate::geom::{Circle, Point, Segment, Vector};

/// Outcome tag without the contact data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionType {
    None,
    Between,
    EndPoint,
}

impl CollisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionType::None => "None",
            CollisionType::Between => "Between",
            CollisionType::EndPoint => "EndPoint",
        }
    }
}

/// Pair of points defining the line of impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    /// Where the circle's boundary touches
    pub circle: Point,
    /// Where the segment is touched
    pub segment: Point,
}

/// Result of a swept collision check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collision {
    /// The circle clears the segment for the whole step
    None,
    /// Contact on the segment's interior
    Between(Contacts),
    /// Contact at or near one of the segment's endpoints
    EndPoint(Contacts),
}

impl Collision {
    pub fn kind(&self) -> CollisionType {
        match self {
            Collision::None => CollisionType::None,
            Collision::Between(_) => CollisionType::Between,
            Collision::EndPoint(_) => CollisionType::EndPoint,
        }
    }

    pub fn contacts(&self) -> Option<Contacts> {
        match *self {
            Collision::None => None,
            Collision::Between(contacts) | Collision::EndPoint(contacts) => Some(contacts),
        }
    }
}

/// Classify the contact between `circle`, moving by `displacement` over one
/// step, and the static `segment`
pub fn classify(circle: &Circle, displacement: Vector, segment: &Segment) -> Collision {
    let root = projection_parameter(circle.center(), segment);
    let closest_on_line = point_on_line(root, segment);
    let circle_contact = point_on_circle(circle, closest_on_line);

    if displacement == Vector::ZERO {
        return overlap(circle, segment, root, closest_on_line, circle_contact);
    }

    let path = Segment::sweep(circle_contact, displacement);
    if let Some(hit) = segment_intersection(&path, segment) {
        let line = segment.direction();
        let lower = segment.begin().dot(line);
        let upper = segment.end().dot(line);
        let proj = hit.dot(line);

        if (proj - lower) * (proj - upper) <= 0.0 {
            log::trace!("interior contact at {hit} (root {root})");
            return Collision::Between(Contacts {
                circle: circle_contact,
                segment: hit,
            });
        }
    }

    let endpoint = nearest_endpoint(root, segment);
    let reverse_path = Segment::sweep(endpoint, -displacement);
    if let Some(hit) = circle_segment_intersection(circle, &reverse_path) {
        log::trace!("endpoint contact at {endpoint}, circle side {hit}");
        return Collision::EndPoint(Contacts {
            circle: hit,
            segment: endpoint,
        });
    }

    Collision::None
}

/// Static test for a circle that does not move: contact when the closest
/// point of the segment lies inside or on the circle
fn overlap(
    circle: &Circle,
    segment: &Segment,
    root: f64,
    closest_on_line: Point,
    circle_contact: Point,
) -> Collision {
    if root > 0.0 && root < 1.0 {
        if !circle.contains_point(closest_on_line) {
            return Collision::None;
        }
        log::trace!("stationary interior overlap at {closest_on_line}");
        return Collision::Between(Contacts {
            circle: circle_contact,
            segment: closest_on_line,
        });
    }

    let endpoint = nearest_endpoint(root, segment);
    if !circle.contains_point(endpoint) {
        return Collision::None;
    }
    log::trace!("stationary endpoint overlap at {endpoint}");
    Collision::EndPoint(Contacts {
        circle: point_on_circle(circle, endpoint),
        segment: endpoint,
    })
}

//! Circle and segment shapes
//!
//! Fields are private so the only ways in are the validating constructors and
//! deserialization (which runs the same checks).

use serde::{Deserialize, Serialize};

use super::vector::{Point, Vector, perp, unit};
use crate::error::GeometryError;

/// A circular body at the start of a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleRepr")]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Deserialize)]
struct CircleRepr {
    center: Point,
    radius: f64,
}

impl TryFrom<CircleRepr> for Circle {
    type Error = GeometryError;

    fn try_from(repr: CircleRepr) -> Result<Self, Self::Error> {
        Circle::new(repr.center, repr.radius)
    }
}

impl Default for Circle {
    /// Unit circle at the origin
    fn default() -> Self {
        Self {
            center: Point::ZERO,
            radius: 1.0,
        }
    }
}

impl Circle {
    /// Create a circle, rejecting a non-finite center or a radius that is not
    /// strictly positive
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !center.is_finite() {
            return Err(GeometryError::NonFinite("circle center"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Same radius, different center
    pub fn with_center(&self, center: Point) -> Result<Self, GeometryError> {
        Self::new(center, self.radius)
    }

    /// Whether `point` lies inside or on the boundary
    pub fn contains_point(&self, point: Point) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// A static obstacle edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentRepr")]
pub struct Segment {
    begin: Point,
    end: Point,
}

#[derive(Deserialize)]
struct SegmentRepr {
    begin: Point,
    end: Point,
}

impl TryFrom<SegmentRepr> for Segment {
    type Error = GeometryError;

    fn try_from(repr: SegmentRepr) -> Result<Self, Self::Error> {
        Segment::new(repr.begin, repr.end)
    }
}

impl Segment {
    /// Create a segment, rejecting coincident or non-finite endpoints
    pub fn new(begin: Point, end: Point) -> Result<Self, GeometryError> {
        if !(begin.is_finite() && end.is_finite()) {
            return Err(GeometryError::NonFinite("segment"));
        }
        if begin == end {
            return Err(GeometryError::DegenerateSegment {
                x: begin.x,
                y: begin.y,
            });
        }
        Ok(Self { begin, end })
    }

    /// Caller guarantees `begin != end` and finite coordinates
    pub(crate) const fn new_unchecked(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// Sweep path of a point over one step. May be zero-length when the
    /// displacement is zero; the intersection tests reject that case on
    /// their own.
    #[inline]
    pub(crate) fn sweep(origin: Point, displacement: Vector) -> Self {
        Self::new_unchecked(origin, origin + displacement)
    }

    #[inline]
    pub fn begin(&self) -> Point {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Direction vector from `begin` to `end` (not normalized)
    #[inline]
    pub fn direction(&self) -> Vector {
        self.end - self.begin
    }

    /// Unit normal, left of the `begin -> end` direction
    pub fn normal(&self) -> Vector {
        perp(unit(self.direction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Point::new(1.0, -2.0), 3.0).unwrap();
        assert_eq!(c.center(), Point::new(1.0, -2.0));
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn test_circle_rejects_bad_radius() {
        assert_eq!(
            Circle::new(Point::ZERO, 0.0),
            Err(GeometryError::NonPositiveRadius(0.0))
        );
        assert!(Circle::new(Point::ZERO, -1.0).is_err());
        assert!(Circle::new(Point::ZERO, f64::NAN).is_err());
        assert!(Circle::new(Point::ZERO, f64::INFINITY).is_err());
    }

    #[test]
    fn test_circle_rejects_non_finite_center() {
        assert_eq!(
            Circle::new(Point::new(f64::NAN, 0.0), 1.0),
            Err(GeometryError::NonFinite("circle center"))
        );
    }

    #[test]
    fn test_circle_contains_point() {
        let c = Circle::new(Point::ZERO, 1.0).unwrap();
        assert!(c.contains_point(Point::new(0.5, 0.5)));
        assert!(c.contains_point(Point::new(1.0, 0.0)));
        assert!(!c.contains_point(Point::new(1.0, 0.1)));
    }

    #[test]
    fn test_segment_rejects_degenerate() {
        let p = Point::new(2.0, 2.0);
        assert_eq!(
            Segment::new(p, p),
            Err(GeometryError::DegenerateSegment { x: 2.0, y: 2.0 })
        );
    }

    #[test]
    fn test_segment_rejects_non_finite() {
        let err = Segment::new(Point::ZERO, Point::new(f64::INFINITY, 1.0));
        assert_eq!(err, Err(GeometryError::NonFinite("segment")));
    }

    #[test]
    fn test_segment_direction_and_normal() {
        let s = Segment::new(Point::new(2.0, 2.0), Point::new(4.0, 2.0)).unwrap();
        assert_eq!(s.direction(), Vector::new(2.0, 0.0));

        let n = s.normal();
        assert!(n.x.abs() < EPSILON);
        assert!((n.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Segment = serde_json::from_str(r#"{"begin":[0,0],"end":[1,1]}"#).unwrap();
        assert_eq!(ok.end(), Point::new(1.0, 1.0));

        let bad = serde_json::from_str::<Segment>(r#"{"begin":[1,1],"end":[1,1]}"#);
        assert!(bad.is_err());

        let bad = serde_json::from_str::<Circle>(r#"{"center":[0,0],"radius":0}"#);
        assert!(bad.unwrap_err().to_string().contains("radius"));
    }

    #[test]
    fn test_serialize_shape() {
        let c = Circle::new(Point::new(0.0, 1.0), 2.0).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"center":[0.0,1.0],"radius":2.0}"#);
        let back: Circle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}

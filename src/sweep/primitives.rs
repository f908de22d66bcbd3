//! Geometric primitives for the swept circle test
//!
//! Closest-point queries against a line, its endpoints and a circle, plus the
//! two intersection tests the classifier is built from. All of these are pure
//! f64 arithmetic; degenerate numeric cases surface as NaN and are rejected by
//! the range checks rather than by explicit guards.

use crate::consts::{CONTACT_DISTANCE_TOLERANCE, CONTAINMENT_EPSILON};
use crate::geom::{Circle, Point, Segment, unit};

/// Interpolation parameter of the perpendicular foot of `point` on the
/// infinite line through `segment`
///
/// The foot is `root * begin + (1 - root) * end`, so `root == 1` is `begin`,
/// `root == 0` is `end`, and values outside `[0, 1]` fall beyond the segment.
#[inline]
pub fn projection_parameter(point: Point, segment: &Segment) -> f64 {
    let line = segment.begin() - segment.end();
    line.dot(point - segment.end()) / line.dot(line)
}

/// Evaluate the interpolation for `root`. Not clamped to the segment.
#[inline]
pub fn point_on_line(root: f64, segment: &Segment) -> Point {
    root * segment.begin() + (1.0 - root) * segment.end()
}

/// Endpoint on the side of the segment that `root` points to
///
/// `root == 0` is the foot landing exactly on `end`, so it resolves to `end`.
#[inline]
pub fn nearest_endpoint(root: f64, segment: &Segment) -> Point {
    if root > 0.0 {
        segment.begin()
    } else {
        segment.end()
    }
}

/// Point on the boundary of `circle` in the direction of `point`
///
/// NaN when `point` is the circle's center.
#[inline]
pub fn point_on_circle(circle: &Circle, point: Point) -> Point {
    unit(point - circle.center()) * circle.radius() + circle.center()
}

/// `value` lies between `a` and `b` (either order). NaN never does.
#[inline]
fn within(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) - CONTAINMENT_EPSILON && value <= a.max(b) + CONTAINMENT_EPSILON
}

/// Both coordinates of `point` fall inside the bounding box of `segment`
#[inline]
fn bounds_contain(segment: &Segment, point: Point) -> bool {
    within(point.x, segment.begin().x, segment.end().x)
        && within(point.y, segment.begin().y, segment.end().y)
}

/// Slope and y-intercept of the line through `segment`; NaN for a vertical one
#[inline]
fn slope_intercept(segment: &Segment) -> (f64, f64) {
    let d = segment.direction();
    let slope = if d.x != 0.0 { d.y / d.x } else { f64::NAN };
    (slope, segment.begin().y - slope * segment.begin().x)
}

/// Intersection point of two segments
///
/// Intersects the infinite lines in slope/intercept form. A vertical segment
/// has no slope, so the other line is evaluated at its x instead. When both are
/// vertical, or the lines are parallel, the candidate comes out non-finite and
/// fails the containment check below.
pub fn segment_intersection(lhs: &Segment, rhs: &Segment) -> Option<Point> {
    let (m, b) = slope_intercept(lhs);
    let (t, c) = slope_intercept(rhs);

    let candidate = if m.is_nan() && !t.is_nan() {
        let x = lhs.end().x;
        Point::new(x, t * x + c)
    } else if t.is_nan() && !m.is_nan() {
        let x = rhs.end().x;
        Point::new(x, m * x + b)
    } else {
        let x = (b - c) / (t - m);
        Point::new(x, m * x + b)
    };

    (bounds_contain(lhs, candidate) && bounds_contain(rhs, candidate)).then_some(candidate)
}

/// First point where `segment`, walked from `begin` to `end`, meets the
/// boundary of `circle`
///
/// Solves `|begin + t * d - center|^2 = r^2` and keeps the smaller root. The
/// root must lie in `[0, 1]`, widened at either end by
/// [`CONTACT_DISTANCE_TOLERANCE`] measured along the segment, so the slack
/// does not grow with the segment's length. A NaN root from a zero-length
/// segment fails both comparisons and is rejected.
pub fn circle_segment_intersection(circle: &Circle, segment: &Segment) -> Option<Point> {
    let d = segment.direction();
    let f = segment.begin() - circle.center();

    let a = d.dot(d);
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - circle.radius() * circle.radius();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = (-b - discriminant.sqrt()) / (2.0 * a);
    let length = a.sqrt();
    let before_begin = -root * length;
    let past_end = (root - 1.0) * length;
    if !(before_begin <= CONTACT_DISTANCE_TOLERANCE && past_end <= CONTACT_DISTANCE_TOLERANCE) {
        return None;
    }

    Some(segment.begin() + root * d)
}

//! Single-step scenarios
//!
//! A scenario is one circle, one velocity, one elapsed time and one segment,
//! loaded from JSON. Vectors are written as `[x, y]` arrays:
//!
//! ```json
//! {
//!     "circle": { "center": [0, 0], "radius": 1 },
//!     "velocity": [1.29289, 1.29289],
//!     "elapsed": 2.0,
//!     "segment": { "begin": [2, 2], "end": [4, 2] }
//! }
//! ```

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, ScenarioError};
use crate::geom::{Circle, Point, Segment, Vector};
use crate::sweep::{StepOutcome, resolve_step};

fn default_elapsed() -> f64 {
    1.0
}

/// One simulation step to classify and resolve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Body at the start of the step
    pub circle: Circle,
    /// Velocity in units per second
    pub velocity: Vector,
    /// Step length in seconds (defaults to 1, making `velocity` the displacement)
    #[serde(default = "default_elapsed")]
    pub elapsed: f64,
    /// Static obstacle
    pub segment: Segment,
}

impl Default for Scenario {
    /// Circle heading diagonally at the near corner of a horizontal wall
    fn default() -> Self {
        Self {
            circle: Circle::default(),
            velocity: Vector::new(1.29289, 1.29289),
            elapsed: 2.0,
            segment: Segment::new_unchecked(Point::new(2.0, 2.0), Point::new(4.0, 2.0)),
        }
    }
}

impl Scenario {
    /// Parse and validate a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&json)?;
        log::info!("Loaded scenario from {}", path.display());
        Ok(scenario)
    }

    /// Shapes validate themselves; this covers the remaining fields
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !(self.elapsed.is_finite() && self.elapsed >= 0.0) {
            return Err(ScenarioError::InvalidElapsed(self.elapsed));
        }
        if !self.velocity.is_finite() {
            return Err(GeometryError::NonFinite("velocity").into());
        }
        Ok(())
    }

    /// Displacement over the step
    #[inline]
    pub fn displacement(&self) -> Vector {
        self.velocity * self.elapsed
    }

    /// Classify and resolve this step
    pub fn run(&self) -> StepOutcome {
        resolve_step(&self.circle, self.displacement(), &self.segment)
    }

    /// Resolve this step and move the circle to where it ended up
    ///
    /// The velocity keeps its speed and takes the outgoing heading, so calling
    /// this repeatedly plays out a bouncing body.
    pub fn advance(&mut self) -> Result<StepOutcome, GeometryError> {
        let outcome = self.run();
        self.circle = self.circle.with_center(outcome.center)?;
        if outcome.heading != Vector::ZERO {
            self.velocity = outcome.heading * self.velocity.length();
        }
        Ok(outcome)
    }

    /// Random scenario inside a 20x20 box around the origin
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, GeometryError> {
        let center = Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0));
        let circle = Circle::new(center, rng.random_range(0.1..2.0))?;

        let begin = Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0));
        let extent = Vector::from_angle(rng.random_range(0.0..std::f64::consts::TAU))
            * rng.random_range(0.5..10.0_f64);
        let segment = Segment::new(begin, begin + extent)?;

        let velocity = Vector::new(rng.random_range(-8.0..8.0), rng.random_range(-8.0..8.0));

        Ok(Self {
            circle,
            velocity,
            elapsed: rng.random_range(0.25..2.0),
            segment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::CollisionType;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_scenario() {
        let scenario = Scenario::default();
        assert!(scenario.validate().is_ok());
        assert!(scenario.displacement().abs_diff_eq(Vector::new(2.58578, 2.58578), 1e-12));
        assert_eq!(scenario.run().collision.kind(), CollisionType::EndPoint);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "circle": { "center": [0, 0], "radius": 1 },
            "velocity": [1.29289, 1.29289],
            "segment": { "begin": [-1, 2], "end": [1, 2] }
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.elapsed, 1.0);
        assert_eq!(scenario.segment.begin(), Point::new(-1.0, 2.0));
        assert_eq!(scenario.run().collision.kind(), CollisionType::Between);
    }

    #[test]
    fn test_from_json_rejects_degenerate_segment() {
        let json = r#"{
            "circle": { "center": [0, 0], "radius": 1 },
            "velocity": [1, 0],
            "segment": { "begin": [3, 3], "end": [3, 3] }
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
        assert!(err.to_string().contains("degenerate segment"));
    }

    #[test]
    fn test_from_json_rejects_negative_elapsed() {
        let json = r#"{
            "circle": { "center": [0, 0], "radius": 1 },
            "velocity": [1, 0],
            "elapsed": -0.5,
            "segment": { "begin": [3, 0], "end": [3, 3] }
        }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(ScenarioError::InvalidElapsed(e)) if e == -0.5
        ));
    }

    #[test]
    fn test_load_bundled_scenarios() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios");

        let corner = Scenario::load(format!("{dir}/corner.json")).unwrap();
        assert_eq!(corner, Scenario::default());

        let wall = Scenario::load(format!("{dir}/wall.json")).unwrap();
        assert_eq!(wall.run().collision.kind(), CollisionType::Between);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn test_json_round_trip_of_default() {
        let json = serde_json::to_string(&Scenario::default()).unwrap();
        assert_eq!(Scenario::from_json(&json).unwrap(), Scenario::default());
    }

    #[test]
    fn test_advance_bounces_between_walls() {
        let mut scenario = Scenario {
            circle: Circle::default(),
            velocity: Vector::new(0.0, 3.0),
            elapsed: 1.0,
            segment: Segment::new(Point::new(-5.0, 2.0), Point::new(5.0, 2.0)).unwrap(),
        };

        let first = scenario.advance().unwrap();
        assert_eq!(first.collision.kind(), CollisionType::Between);
        assert!(scenario.circle.center().abs_diff_eq(Point::new(0.0, -1.0), 1e-9));
        assert!(scenario.velocity.abs_diff_eq(Vector::new(0.0, -3.0), 1e-9));

        // Now heading away from the wall
        let second = scenario.advance().unwrap();
        assert_eq!(second.collision.kind(), CollisionType::None);
        assert!(scenario.circle.center().abs_diff_eq(Point::new(0.0, -4.0), 1e-9));
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            let sa = Scenario::random(&mut a).unwrap();
            let sb = Scenario::random(&mut b).unwrap();
            assert_eq!(sa, sb);
            assert!(sa.validate().is_ok());
        }
    }
}

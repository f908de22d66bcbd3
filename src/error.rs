//! Error types
//!
//! Geometry is validated once, at construction. Everything downstream of a
//! valid `Circle` / `Segment` is infallible.

use thiserror::Error;

/// Invalid shape input
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Segment endpoints coincide
    #[error("degenerate segment: begin and end are both ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    /// Circle radius is zero, negative or not finite
    #[error("circle radius must be finite and positive, got {0}")]
    NonPositiveRadius(f64),

    /// A coordinate is NaN or infinite
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Failure while loading or validating a scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or shapes that failed validation while deserializing
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Shape validation error
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// Elapsed time is negative or not finite
    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidElapsed(f64),
}

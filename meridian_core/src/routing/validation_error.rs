use thiserror::Error;

/// A single rejected condition of an inbound route request. Every variant
/// carries enough context to localize the fault: the offending field, and
/// where it applies, the 0-based waypoint index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("request must contain at least one point")]
    MissingPoints,

    #[error("null point in request at index {index}")]
    NullWaypoint { index: usize },

    #[error("point {index} ({lat}, {lon}) is outside the bounds of the graph")]
    OutOfBounds { index: usize, lat: f64, lon: f64 },

    #[error("wrong heading count: expected one of {expected:?} headings, got {actual}")]
    HeadingCountMismatch { expected: Vec<usize>, actual: usize },

    #[error("heading {value} at index {index} must be in the range [0, 360) or NaN")]
    HeadingOutOfRange { index: usize, value: f64 },

    #[error("wrong curbside count: expected {expected} curbsides, got {actual}")]
    CurbsideCountMismatch { expected: usize, actual: usize },

    #[error("unknown curbside value '{value}' at index {index}")]
    InvalidCurbsideValue { index: usize, value: String },

    #[error("wrong point hint count: expected {expected} hints, got {actual}")]
    PointHintCountMismatch { expected: usize, actual: usize },
}

impl ValidationError {
    /// The 0-based waypoint index the error is attributed to, for errors
    /// that localize to a single slot.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::NullWaypoint { index }
            | ValidationError::OutOfBounds { index, .. }
            | ValidationError::HeadingOutOfRange { index, .. }
            | ValidationError::InvalidCurbsideValue { index, .. } => Some(*index),
            ValidationError::MissingPoints
            | ValidationError::HeadingCountMismatch { .. }
            | ValidationError::CurbsideCountMismatch { .. }
            | ValidationError::PointHintCountMismatch { .. } => None,
        }
    }
}

use tracing::debug;

use crate::extent::GeographicExtent;
use crate::routing::curbside::Curbside;
use crate::routing::routing_request::RouteRequest;
use crate::routing::validation_error::ValidationError;

/// Whether a single heading may stand in for a full per-waypoint sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeadingPolicy {
    /// A lone heading is legal for any number of waypoints and constrains
    /// the departure at the first one.
    #[default]
    DepartureHeading,
    /// Headings, when present, must be given for every waypoint.
    PerWaypoint,
}

impl HeadingPolicy {
    fn allowed_counts(&self, point_count: usize) -> Vec<usize> {
        match self {
            HeadingPolicy::DepartureHeading if point_count == 1 => vec![1],
            HeadingPolicy::DepartureHeading => vec![1, point_count],
            HeadingPolicy::PerWaypoint => vec![point_count],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    /// Non-empty by construction: at least one check rejected the request.
    Invalid(Vec<ValidationError>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            ValidationOutcome::Valid => Vec::new(),
            ValidationOutcome::Invalid(errors) => errors,
        }
    }
}

/// The gate between an inbound request and the routing engine. Checks run
/// in a fixed order: structural failures (no points, null slots) end the
/// pass immediately, everything after that accumulates so a single response
/// reports all independent problems.
#[derive(Clone, Debug, Default)]
pub struct RequestValidator {
    heading_policy: HeadingPolicy,
}

impl RequestValidator {
    pub fn new() -> Self {
        RequestValidator::default()
    }

    pub fn with_heading_policy(heading_policy: HeadingPolicy) -> Self {
        RequestValidator { heading_policy }
    }

    pub fn validate(
        &self,
        request: &RouteRequest,
        extent: &GeographicExtent,
    ) -> ValidationOutcome {
        if request.points.is_empty() {
            return Self::rejected(vec![ValidationError::MissingPoints]);
        }

        let null_slots: Vec<ValidationError> = request
            .points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.is_none())
            .map(|(index, _)| ValidationError::NullWaypoint { index })
            .collect();

        // A request with holes cannot be meaningfully bounds-checked.
        if !null_slots.is_empty() {
            return Self::rejected(null_slots);
        }

        let mut errors = Vec::new();
        self.check_bounds(request, extent, &mut errors);
        self.check_headings(request, &mut errors);
        self.check_curbsides(request, &mut errors);
        self.check_point_hints(request, &mut errors);

        if errors.is_empty() {
            ValidationOutcome::Valid
        } else {
            Self::rejected(errors)
        }
    }

    fn rejected(errors: Vec<ValidationError>) -> ValidationOutcome {
        debug!("Rejected route request with {} validation errors", errors.len());
        ValidationOutcome::Invalid(errors)
    }

    fn check_bounds(
        &self,
        request: &RouteRequest,
        extent: &GeographicExtent,
        errors: &mut Vec<ValidationError>,
    ) {
        for (index, point) in request.points.iter().enumerate() {
            if let Some(point) = point {
                if !extent.contains(point.lat, point.lon) {
                    errors.push(ValidationError::OutOfBounds {
                        index,
                        lat: point.lat,
                        lon: point.lon,
                    });
                }
            }
        }
    }

    /// Every per-waypoint attribute shares one cardinality rule: an empty
    /// sequence means the attribute is absent, any other length must be in
    /// `allowed`. Returns whether per-element checks may run.
    fn check_aligned_count(
        actual: usize,
        allowed: &[usize],
        on_mismatch: impl FnOnce(&[usize], usize) -> ValidationError,
        errors: &mut Vec<ValidationError>,
    ) -> bool {
        if actual == 0 {
            return false;
        }

        if allowed.contains(&actual) {
            return true;
        }

        errors.push(on_mismatch(allowed, actual));
        false
    }

    fn check_headings(&self, request: &RouteRequest, errors: &mut Vec<ValidationError>) {
        let allowed = self.heading_policy.allowed_counts(request.points.len());

        let aligned = Self::check_aligned_count(
            request.headings.len(),
            &allowed,
            |allowed, actual| ValidationError::HeadingCountMismatch {
                expected: allowed.to_vec(),
                actual,
            },
            errors,
        );

        if !aligned {
            return;
        }

        for (index, &value) in request.headings.iter().enumerate() {
            // NaN is the "no preference" sentinel.
            if value.is_nan() {
                continue;
            }

            if !(0.0..360.0).contains(&value) {
                errors.push(ValidationError::HeadingOutOfRange { index, value });
            }
        }
    }

    fn check_curbsides(&self, request: &RouteRequest, errors: &mut Vec<ValidationError>) {
        let expected = request.points.len();

        let aligned = Self::check_aligned_count(
            request.curbsides.len(),
            &[expected],
            |_, actual| ValidationError::CurbsideCountMismatch { expected, actual },
            errors,
        );

        if !aligned {
            return;
        }

        for (index, value) in request.curbsides.iter().enumerate() {
            if value.parse::<Curbside>().is_err() {
                errors.push(ValidationError::InvalidCurbsideValue {
                    index,
                    value: value.clone(),
                });
            }
        }
    }

    fn check_point_hints(&self, request: &RouteRequest, errors: &mut Vec<ValidationError>) {
        let expected = request.points.len();

        Self::check_aligned_count(
            request.point_hints.len(),
            &[expected],
            |_, actual| ValidationError::PointHintCountMismatch { expected, actual },
            errors,
        );
    }
}

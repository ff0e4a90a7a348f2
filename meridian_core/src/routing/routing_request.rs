use serde::Deserialize;

use crate::geopoint::GeoPoint;

/// An inbound route request as handed over by the transport layer.
///
/// A waypoint slot is `None` when the transport layer could not resolve the
/// incoming value to a coordinate; the validator reports such slots instead
/// of panicking on them. The parallel attribute sequences are empty when the
/// client did not send them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteRequest {
    pub points: Vec<Option<GeoPoint>>,

    /// Azimuths in degrees, clockwise from north. NaN means "no preference"
    /// for that waypoint.
    #[serde(default)]
    pub headings: Vec<f64>,

    /// Curbside directives, kept as raw strings so unknown values can be
    /// reported with their index instead of failing deserialization.
    #[serde(default)]
    pub curbsides: Vec<String>,

    /// Free-text disambiguation hints, one per waypoint.
    #[serde(default)]
    pub point_hints: Vec<String>,
}

impl RouteRequest {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        RouteRequest {
            points: points.into_iter().map(Some).collect(),
            ..RouteRequest::default()
        }
    }

    pub fn with_headings(mut self, headings: Vec<f64>) -> Self {
        self.headings = headings;
        self
    }

    pub fn with_curbsides<S: Into<String>>(mut self, curbsides: Vec<S>) -> Self {
        self.curbsides = curbsides.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_point_hints<S: Into<String>>(mut self, point_hints: Vec<S>) -> Self {
        self.point_hints = point_hints.into_iter().map(Into::into).collect();
        self
    }
}

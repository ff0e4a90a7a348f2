use crate::geopoint::GeoPoint;

pub struct RoutingPathLeg {
    points: Vec<GeoPoint>,
}

impl RoutingPathLeg {
    pub fn new(points: Vec<GeoPoint>) -> RoutingPathLeg {
        RoutingPathLeg { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

/// A computed route, one leg per consecutive waypoint pair.
pub struct RoutingPath {
    legs: Vec<RoutingPathLeg>,
}

impl RoutingPath {
    pub fn new(legs: Vec<RoutingPathLeg>) -> RoutingPath {
        RoutingPath { legs }
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }
}

use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::routing::routing_path::RoutingPath;

/// The search engine behind the validation gate. Implementations receive a
/// request whose waypoints have already been validated against the graph's
/// extent.
pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        points: &[GeoPoint],
    ) -> Result<RoutingPath, String>;
}

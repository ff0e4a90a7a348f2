use thiserror::Error;
use tracing::debug;

use crate::extent::GeographicExtent;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::routing::request_validator::{RequestValidator, ValidationOutcome};
use crate::routing::routing_request::RouteRequest;
use crate::routing::routing_response::RouteResponse;
use crate::routing::shortest_path_algorithm::ShortestPathAlgorithm;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("cannot route on a graph without nodes")]
    EmptyGraph,
    #[error("path computation failed: {0}")]
    Path(String),
}

/// Entry point for route requests. Owns the loaded graph, the extent
/// computed from it, and the search algorithm; every request passes the
/// validator before any path computation starts.
pub struct Router<G, A> {
    graph: G,
    extent: GeographicExtent,
    validator: RequestValidator,
    algorithm: A,
}

impl<G: Graph, A: ShortestPathAlgorithm> Router<G, A> {
    pub fn new(graph: G, algorithm: A) -> Result<Router<G, A>, RouterError> {
        Self::with_validator(graph, algorithm, RequestValidator::new())
    }

    pub fn with_validator(
        graph: G,
        algorithm: A,
        validator: RequestValidator,
    ) -> Result<Router<G, A>, RouterError> {
        let extent = GeographicExtent::from_graph(&graph).ok_or(RouterError::EmptyGraph)?;

        Ok(Router {
            graph,
            extent,
            validator,
            algorithm,
        })
    }

    pub fn extent(&self) -> &GeographicExtent {
        &self.extent
    }

    /// An invalid request comes back as a response carrying the full
    /// ordered error list; only a failure of the search engine itself is an
    /// `Err`.
    pub fn route(&mut self, request: &RouteRequest) -> Result<RouteResponse, RouterError> {
        match self.validator.validate(request, &self.extent) {
            ValidationOutcome::Invalid(errors) => {
                debug!("Route request rejected with {} errors", errors.len());
                Ok(RouteResponse::from_errors(errors))
            }
            ValidationOutcome::Valid => {
                let points: Vec<GeoPoint> = request.points.iter().flatten().copied().collect();

                let path = self
                    .algorithm
                    .calc_path(&self.graph, &points)
                    .map_err(RouterError::Path)?;

                Ok(RouteResponse::from_path(path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::routing_path::{RoutingPath, RoutingPathLeg};
    use crate::test_graph_utils::test_graph::TestGraph;

    /// Connects consecutive waypoints with straight legs and counts how
    /// often the router actually reached it.
    struct StraightLineAlgorithm {
        calls: usize,
    }

    impl StraightLineAlgorithm {
        fn new() -> Self {
            StraightLineAlgorithm { calls: 0 }
        }
    }

    impl ShortestPathAlgorithm for StraightLineAlgorithm {
        fn calc_path(
            &mut self,
            _graph: &impl Graph,
            points: &[GeoPoint],
        ) -> Result<RoutingPath, String> {
            self.calls += 1;

            let legs = points
                .windows(2)
                .map(|pair| RoutingPathLeg::new(pair.to_vec()))
                .collect();

            Ok(RoutingPath::new(legs))
        }
    }

    struct FailingAlgorithm;

    impl ShortestPathAlgorithm for FailingAlgorithm {
        fn calc_path(
            &mut self,
            _graph: &impl Graph,
            _points: &[GeoPoint],
        ) -> Result<RoutingPath, String> {
            Err("start and end are not connected".to_string())
        }
    }

    #[test]
    fn test_empty_graph_is_rejected_at_construction() {
        let result = Router::new(TestGraph::new(), StraightLineAlgorithm::new());

        assert!(matches!(result, Err(RouterError::EmptyGraph)));
    }

    #[test]
    fn test_invalid_request_never_reaches_the_algorithm() {
        let graph = TestGraph::from_bounds(-2.0, -2.0, 2.0, 2.0);
        let mut router = Router::new(graph, StraightLineAlgorithm::new()).unwrap();

        let request = RouteRequest::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(50.0, 50.0)]);
        let response = router.route(&request).unwrap();

        assert!(response.has_errors());
        assert!(response.path().is_none());
        assert_eq!(router.algorithm.calls, 0);
    }

    #[test]
    fn test_valid_request_is_routed() {
        let graph = TestGraph::from_bounds(-5.0, -5.0, 5.0, 5.0);
        let mut router = Router::new(graph, StraightLineAlgorithm::new()).unwrap();

        let request = RouteRequest::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 2.0),
        ]);

        let response = router.route(&request).unwrap();

        assert!(!response.has_errors());
        assert_eq!(response.path().unwrap().legs().len(), 2);
        assert_eq!(router.algorithm.calls, 1);
    }

    #[test]
    fn test_algorithm_failure_is_not_a_validation_error() {
        let graph = TestGraph::from_bounds(-5.0, -5.0, 5.0, 5.0);
        let mut router = Router::new(graph, FailingAlgorithm).unwrap();

        let request = RouteRequest::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        let result = router.route(&request);

        assert!(matches!(result, Err(RouterError::Path(_))));
    }

    #[test]
    fn test_extent_is_derived_from_the_graph() {
        let graph = TestGraph::from_bounds(-2.0, -3.0, 2.0, 3.0);
        let router = Router::new(graph, StraightLineAlgorithm::new()).unwrap();

        assert_eq!(*router.extent(), GeographicExtent::new(-2.0, -3.0, 2.0, 3.0));
    }
}

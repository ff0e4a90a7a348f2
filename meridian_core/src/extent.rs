use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::Graph;

/// Axis-aligned bounding box over a graph's node coordinates. Built once
/// per graph load and immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeographicExtent {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl GeographicExtent {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        GeographicExtent {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Scans the graph's node coordinates and folds min/max over both axes.
    /// Returns `None` for a graph without nodes: a degenerate extent has no
    /// meaningful containment and callers must not query one.
    pub fn from_graph(graph: &impl Graph) -> Option<GeographicExtent> {
        if graph.node_count() == 0 {
            return None;
        }

        let first = graph.node_geometry(0);
        let mut extent = GeographicExtent {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };

        for node_id in 1..graph.node_count() {
            let point = graph.node_geometry(node_id);
            extent.min_lat = extent.min_lat.min(point.lat);
            extent.max_lat = extent.max_lat.max(point.lat);
            extent.min_lon = extent.min_lon.min(point.lon);
            extent.max_lon = extent.max_lon.max(point.lon);
        }

        debug!(
            "Computed extent from {} nodes: lat [{}, {}], lon [{}, {}]",
            graph.node_count(),
            extent.min_lat,
            extent.max_lat,
            extent.min_lon,
            extent.max_lon
        );

        Some(extent)
    }

    /// Inclusive on all four sides: points exactly on the boundary are
    /// inside, otherwise the graph's outermost nodes would be unroutable.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }
}

use crate::geopoint::GeoPoint;

/// Read-only node coordinate access to a loaded graph. The routing layer
/// only needs to know where the nodes are; storage, edges and weighting
/// live behind other interfaces.
pub trait Graph {
    fn node_count(&self) -> usize;

    fn node_geometry(&self, node_id: usize) -> &GeoPoint;
}

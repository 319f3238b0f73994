use crate::dataset::{MapDataset, VertexRecord};
use crate::errors::RouteError;
use crate::routing::{Route, reconstruct, shortest_path_tree};

use tracing::debug;

/// Route orchestrator and read-only query surface over one map dataset.
///
/// Each `compute_route` call is self-contained: it builds its own graph
/// and search state from the dataset and drops both before returning, so
/// nothing is shared across calls. The router itself is immutable after
/// construction.
pub struct Router {
    dataset: MapDataset,
}

impl Router {
    pub fn new(dataset: MapDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &MapDataset {
        &self.dataset
    }

    /// Computes the shortest route between two vertex ids.
    ///
    /// Identical endpoints are rejected up front ([`RouteError::TrivialRoute`]),
    /// then negative ids ([`RouteError::InvalidId`]), then ids absent from
    /// the dataset ([`RouteError::VertexNotFound`]). A valid pair with no
    /// connecting path fails with [`RouteError::Unreachable`].
    pub fn compute_route(&self, origin_id: i32, destination_id: i32) -> Result<Route, RouteError> {
        if origin_id == destination_id {
            return Err(RouteError::TrivialRoute(origin_id));
        }
        if origin_id < 0 {
            return Err(RouteError::InvalidId(origin_id));
        }
        if destination_id < 0 {
            return Err(RouteError::InvalidId(destination_id));
        }

        debug!(origin_id, destination_id, "computing route");

        let graph = self.dataset.build_graph();
        let origin = graph
            .index_of(origin_id)
            .ok_or(RouteError::VertexNotFound(origin_id))?;
        let destination = graph
            .index_of(destination_id)
            .ok_or(RouteError::VertexNotFound(destination_id))?;

        let state = shortest_path_tree(&graph, origin);
        reconstruct(&graph, &state, origin, destination)
        // graph and state are scoped to this call and dropped here
    }

    /// Total number of vertices in the dataset.
    pub fn vertex_count(&self) -> usize {
        self.dataset.vertices().len()
    }

    /// Attributes of the vertex with the given id.
    pub fn vertex_info(&self, id: i32) -> Result<&VertexRecord, RouteError> {
        self.dataset
            .vertex_by_id(id)
            .ok_or(RouteError::VertexNotFound(id))
    }

    /// Street label of the vertex with the given id.
    pub fn vertex_street(&self, id: i32) -> Result<&str, RouteError> {
        self.vertex_info(id).map(|v| v.street.as_str())
    }

    /// Number of points of interest in the dataset.
    pub fn poi_count(&self) -> usize {
        self.dataset.points_of_interest().count()
    }

    /// The `index`-th point of interest, counting only POI records in
    /// dataset order.
    pub fn poi_info(&self, index: usize) -> Result<&VertexRecord, RouteError> {
        self.dataset
            .points_of_interest()
            .nth(index)
            .ok_or(RouteError::IndexOutOfRange(index))
    }
}

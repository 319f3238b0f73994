pub mod city;

use crate::collections::FxIndexMap;
use crate::graph::{Graph, VertexKind};

use tracing::{debug, warn};

/// One vertex row of the map dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexRecord {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub street: String,
    pub kind: VertexKind,
    pub x: i32,
    pub y: i32,
}

/// One directed edge row of the map dataset, weight in meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source_id: i32,
    pub dest_id: i32,
    pub weight: u32,
}

/// Immutable map dataset handed to the router at construction time.
///
/// The dataset is read-only input: routing never mutates it, and each
/// route request builds its own fresh [`Graph`] from these records. Ids
/// are expected but not guaranteed unique - duplicates are tolerated and
/// resolve to the first record, which is logged once at construction.
#[derive(Clone, Debug, Default)]
pub struct MapDataset {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
}

impl MapDataset {
    pub fn new(vertices: Vec<VertexRecord>, edges: Vec<EdgeRecord>) -> Self {
        let mut first_seen: FxIndexMap<i32, usize> = FxIndexMap::default();
        for (record, vertex) in vertices.iter().enumerate() {
            match first_seen.get(&vertex.id) {
                Some(&first) => {
                    warn!(
                        id = vertex.id,
                        first, record, "duplicate vertex id; lookups resolve to the first record"
                    );
                }
                None => {
                    first_seen.insert(vertex.id, record);
                }
            }
        }
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Linear id lookup over the vertex rows, first match wins.
    pub fn vertex_by_id(&self, id: i32) -> Option<&VertexRecord> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Vertex rows whose kind is [`VertexKind::PointOfInterest`], in
    /// dataset order.
    pub fn points_of_interest(&self) -> impl Iterator<Item = &VertexRecord> {
        self.vertices
            .iter()
            .filter(|v| v.kind == VertexKind::PointOfInterest)
    }

    /// Builds a fresh graph from the records. Edge rows referencing
    /// unknown vertex ids are dropped by the graph store.
    pub fn build_graph(&self) -> Graph<u32> {
        let mut graph = Graph::new();
        for v in &self.vertices {
            graph.add_vertex(v.id, &v.name, &v.category, &v.street, v.kind, v.x, v.y);
        }
        for e in &self.edges {
            graph.add_edge(e.source_id, e.dest_id, e.weight);
        }
        debug!(
            vertices = graph.len(),
            edges = self.edges.len(),
            "graph built from dataset"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, kind: VertexKind) -> VertexRecord {
        VertexRecord {
            id,
            name: format!("v{id}"),
            category: "Corner".to_string(),
            street: "N/A".to_string(),
            kind,
            x: 0,
            y: 0,
        }
    }

    #[test]
    fn build_graph_carries_all_vertices() {
        let dataset = MapDataset::new(
            vec![record(1, VertexKind::Corner), record(2, VertexKind::Corner)],
            vec![EdgeRecord {
                source_id: 1,
                dest_id: 2,
                weight: 30,
            }],
        );

        let graph = dataset.build_graph();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges_from(0).len(), 1);
    }

    #[test]
    fn edge_rows_with_unknown_ids_are_dropped() {
        let dataset = MapDataset::new(
            vec![record(1, VertexKind::Corner)],
            vec![EdgeRecord {
                source_id: 1,
                dest_id: 9,
                weight: 5,
            }],
        );

        let graph = dataset.build_graph();
        assert!(graph.edges_from(0).is_empty());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let mut second = record(7, VertexKind::PointOfInterest);
        second.name = "later".to_string();
        let dataset = MapDataset::new(vec![record(7, VertexKind::Corner), second], vec![]);

        assert_eq!(dataset.vertex_by_id(7).unwrap().name, "v7");
    }

    #[test]
    fn poi_filter_keeps_dataset_order() {
        let dataset = MapDataset::new(
            vec![
                record(0, VertexKind::Corner),
                record(1, VertexKind::PointOfInterest),
                record(2, VertexKind::PointOfInterest),
            ],
            vec![],
        );

        let ids: Vec<i32> = dataset.points_of_interest().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

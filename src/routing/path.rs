use crate::errors::RouteError;
use crate::graph::Graph;
use super::SearchState;

use tracing::debug;

/// A computed route: vertex ids in origin -> destination order, inclusive
/// of both endpoints, plus the accumulated weight along the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<W = u32> {
    pub vertex_ids: Vec<i32>,
    pub total_distance: W,
}

/// Rebuilds the origin -> destination route from the engine's predecessor
/// array.
///
/// Walks backward from `destination` until a vertex with no predecessor,
/// then reverses the collected ids. Fails with `Unreachable` when the
/// destination was never reached, and with `CorruptPath` when the walk
/// exceeds the vertex count without terminating - that means a
/// predecessor cycle, which correct relaxation cannot produce.
pub fn reconstruct<W: Copy + std::fmt::Debug>(
    graph: &Graph<W>,
    state: &SearchState<W>,
    origin: usize,
    destination: usize,
) -> Result<Route<W>, RouteError> {
    let Some(total_distance) = state.distances[destination] else {
        return Err(RouteError::Unreachable);
    };

    let mut vertex_ids = Vec::new();
    let mut current = Some(destination);
    while let Some(index) = current {
        if vertex_ids.len() == graph.len() {
            return Err(RouteError::CorruptPath);
        }
        vertex_ids.push(graph.vertex(index).id);
        current = state.predecessors[index];
    }
    vertex_ids.reverse();

    debug!(
        origin = graph.vertex(origin).id,
        destination = graph.vertex(destination).id,
        stops = vertex_ids.len(),
        ?total_distance,
        "route reconstructed"
    );

    Ok(Route {
        vertex_ids,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexKind;
    use crate::routing::shortest_path_tree;

    fn graph_with_corners(ids: &[i32]) -> Graph {
        let mut g = Graph::new();
        for &id in ids {
            g.add_vertex(id, "corner", "Corner", "N/A", VertexKind::Corner, 0, 0);
        }
        g
    }

    #[test]
    fn two_hop_route() {
        // A(10) -> B(20) weight 10, B -> C(30) weight 5
        let mut g = graph_with_corners(&[10, 20, 30]);
        g.add_edge(10, 20, 10);
        g.add_edge(20, 30, 5);

        let state = shortest_path_tree(&g, 0);
        let route = reconstruct(&g, &state, 0, 2).unwrap();

        assert_eq!(route.vertex_ids, vec![10, 20, 30]);
        assert_eq!(route.total_distance, 15);
    }

    #[test]
    fn unreachable_destination() {
        let mut g = graph_with_corners(&[0, 1, 2]);
        g.add_edge(0, 1, 3);

        let state = shortest_path_tree(&g, 0);
        let err = reconstruct(&g, &state, 0, 2).unwrap_err();
        assert_eq!(err, RouteError::Unreachable);
    }

    #[test]
    fn full_length_path_is_not_corrupt() {
        // A chain visiting every vertex is legitimate, the cycle guard
        // must only trip past the vertex count.
        let mut g = graph_with_corners(&[0, 1, 2, 3]);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);

        let state = shortest_path_tree(&g, 0);
        let route = reconstruct(&g, &state, 0, 3).unwrap();
        assert_eq!(route.vertex_ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn predecessor_cycle_is_reported() {
        let g = graph_with_corners(&[0, 1, 2]);
        // Hand-built corrupt state: 1 and 2 point at each other.
        let state = SearchState {
            distances: vec![Some(0u32), Some(1), Some(2)],
            predecessors: vec![None, Some(2), Some(1)],
        };

        let err = reconstruct(&g, &state, 0, 2).unwrap_err();
        assert_eq!(err, RouteError::CorruptPath);
    }
}

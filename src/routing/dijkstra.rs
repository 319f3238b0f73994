use crate::graph::Graph;

use std::fmt::Debug;
use num_traits::Zero;
use tracing::trace;

/// Full shortest-path tree for one engine invocation, indexed by vertex
/// position in the graph. `None` in `distances` means unreached; `None`
/// in `predecessors` means no prior vertex on the best-known path.
/// Ephemeral - built per call and discarded after path reconstruction.
#[derive(Debug)]
pub struct SearchState<W> {
    pub distances: Vec<Option<W>>,
    pub predecessors: Vec<Option<usize>>,
}

/// Dijkstra's algorithm over the whole graph, array-scan variant.
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Computes distances and predecessors for every vertex reachable from
/// `source` - there is no destination short-circuit, the caller picks the
/// target out of the returned arrays. Selection is an O(V) scan per
/// iteration, O(V^2) total, which beats a priority queue's overhead at
/// the ~120-vertex scale this crate targets.
///
/// Precondition: edge weights are non-negative. Negative weights are not
/// detected and silently corrupt the result.
pub fn shortest_path_tree<W>(graph: &Graph<W>, source: usize) -> SearchState<W>
where
    W: Zero + Ord + Copy + Debug,
{
    let n = graph.len();
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    distances[source] = Some(W::zero());

    for _ in 0..n {
        // No unvisited vertex with a finite distance - the rest of the
        // graph is unreachable from the source.
        let Some(u) = select_min(&distances, &visited) else {
            break;
        };
        visited[u] = true;

        let Some(dist_u) = distances[u] else {
            break;
        };
        trace!(index = u, id = graph.vertex(u).id, distance = ?dist_u, "visiting vertex");

        // Relax every outgoing edge, newest first. Edges whose destination
        // id no longer resolves are skipped.
        for edge in graph.edges_from(u) {
            let Some(v) = graph.index_of(edge.dest_id) else {
                continue;
            };
            if visited[v] {
                continue;
            }
            let candidate = dist_u + edge.weight;
            let improved = match distances[v] {
                Some(current) => candidate < current,
                None => true,
            };
            // Strict improvement only: an equal-cost alternative never
            // replaces an established predecessor.
            if improved {
                trace!(index = v, id = edge.dest_id, distance = ?candidate, "relaxed");
                distances[v] = Some(candidate);
                predecessors[v] = Some(u);
            }
        }
    }

    SearchState {
        distances,
        predecessors,
    }
}

/// Picks the unvisited vertex with the smallest finite distance.
///
/// Ties are resolved by overwriting the candidate on `<=`, so among equal
/// minima the last vertex in index order wins. Route results depend on
/// this ordering being reproducible, so it must not change.
fn select_min<W>(distances: &[Option<W>], visited: &[bool]) -> Option<usize>
where
    W: Ord + Copy,
{
    let mut best: Option<(usize, W)> = None;
    for (i, d) in distances.iter().enumerate() {
        if visited[i] {
            continue;
        }
        let Some(d) = *d else {
            continue;
        };
        match best {
            Some((_, b)) if d > b => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

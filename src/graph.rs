use tracing::warn;

/// Discriminates plain street corners from points of interest.
/// Points of interest are exposed separately by the query surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    Corner,
    PointOfInterest,
}

/// A navigable point on the map: a street corner or a point of interest.
/// Coordinates are display-only and never participate in routing.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub street: String,
    pub kind: VertexKind,
    pub x: i32,
    pub y: i32,
}

/// Directed arc to another vertex, weighted in meters.
/// Owned by the source vertex's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<W> {
    pub dest_id: i32,
    pub weight: W,
}

/// In-memory graph store: a vertex collection in insertion order plus one
/// adjacency list per vertex, indexed by the vertex's position in the
/// collection (not by its id). Ids need not be contiguous or sorted.
///
/// Lookup is a linear scan - the target maps are small (~120 vertices),
/// so an id->index map would be the natural optimization but is not worth
/// carrying yet.
#[derive(Clone, Debug, Default)]
pub struct Graph<W = u32> {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W: Copy> Graph<W> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Appends a vertex with an empty adjacency entry.
    ///
    /// Ids are not checked for uniqueness: a duplicate id is tolerated and
    /// `index_of` resolves it to the first match. Policy for duplicates is
    /// the caller's responsibility.
    #[allow(clippy::too_many_arguments)]
    pub fn add_vertex(
        &mut self,
        id: i32,
        name: &str,
        category: &str,
        street: &str,
        kind: VertexKind,
        x: i32,
        y: i32,
    ) {
        self.vertices.push(Vertex {
            id,
            name: name.to_string(),
            category: category.to_string(),
            street: street.to_string(),
            kind,
            x,
            y,
        });
        self.adjacency.push(Vec::new());
    }

    /// Adds a directed edge from `source_id` to `dest_id`.
    ///
    /// An edge referencing a vertex id that is not in the store is dropped
    /// without error - the store tolerates sparse or partial datasets and
    /// leaves validation to the caller. The new edge is prepended, so
    /// adjacency iteration order is reverse-insertion order. Callers must
    /// not depend on edge order for correctness, only for the engine's
    /// documented relaxation order.
    pub fn add_edge(&mut self, source_id: i32, dest_id: i32, weight: W) {
        let Some(source) = self.index_of(source_id) else {
            warn!(source_id, dest_id, "dropping edge: source vertex not found");
            return;
        };
        if self.index_of(dest_id).is_none() {
            warn!(source_id, dest_id, "dropping edge: destination vertex not found");
            return;
        }
        self.adjacency[source].insert(0, Edge { dest_id, weight });
    }

    /// Resolves a vertex id to its position in the collection, O(V).
    /// First match wins when ids are duplicated.
    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Outgoing edges of the vertex at `index`, newest first.
    pub fn edges_from(&self, index: usize) -> &[Edge<W>] {
        &self.adjacency[index]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

//! Shortest walking routes on a fixed pedestrian map.
//!
//! The map is a directed graph of street corners and points of interest
//! with edge weights in meters. [`Router`] composes the pieces into one
//! request-response cycle: build a [`graph::Graph`] from a
//! [`dataset::MapDataset`], run the array-scan Dijkstra engine in
//! [`routing::dijkstra`], and reconstruct the origin -> destination
//! sequence in [`routing::path`]. The [`ffi`] module exposes the same
//! operations over a C ABI for non-Rust frontends.

mod collections;
pub mod dataset;
pub mod errors;
pub mod ffi;
pub mod graph;
pub mod router;
pub mod routing;

pub use dataset::{EdgeRecord, MapDataset, VertexRecord};
pub use errors::RouteError;
pub use graph::{Edge, Graph, Vertex, VertexKind};
pub use router::Router;
pub use routing::{Route, SearchState};

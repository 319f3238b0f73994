pub mod dijkstra;
pub mod path;

pub use dijkstra::{SearchState, shortest_path_tree};
pub use path::{Route, reconstruct};

use thiserror::Error;

/// Failures reported by the route engine and the query surface.
/// Every failure is returned to the immediate caller as a value;
/// the crate never panics on bad input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// A vertex id was negative. Ids are non-negative by contract.
    #[error("invalid vertex id {0}: ids must be non-negative")]
    InvalidId(i32),

    /// Origin and destination are the same vertex. No route is computed
    /// for identical endpoints, even though a zero-length route would be
    /// mathematically valid.
    #[error("origin and destination are both vertex {0}")]
    TrivialRoute(i32),

    /// The id does not resolve to any vertex in the dataset.
    #[error("vertex id {0} not found")]
    VertexNotFound(i32),

    /// No path exists from the origin to the destination.
    #[error("destination is unreachable from origin")]
    Unreachable,

    /// The predecessor chain did not terminate within the vertex count.
    /// Indicates a violated engine invariant (a predecessor cycle), not
    /// a caller error.
    #[error("predecessor chain exceeded the vertex count")]
    CorruptPath,

    /// A point-of-interest index was past the end of the POI listing.
    #[error("point of interest index {0} out of range")]
    IndexOutOfRange(usize),
}

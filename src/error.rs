//! Error types for grid construction and searching

use thiserror::Error;

use crate::Point;

/// Everything that can go wrong when building a [`Grid`](crate::Grid) or searching on it.
///
/// Note that not finding a Path is not an error: searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathfindingError {
    /// The Grid would have no cells, or more than fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// the requested width
        width: usize,
        /// the requested height
        height: usize,
    },

    /// A Point lies outside of the Grid.
    #[error("{pos:?} is outside of the {width}x{height} grid")]
    OutOfBounds {
        /// the offending Point
        pos: Point,
        /// the width of the Grid
        width: usize,
        /// the height of the Grid
        height: usize,
    },

    /// The start or goal of a search is not walkable.
    #[error("endpoint {0:?} is not walkable")]
    UnreachableEndpoint(Point),

    /// The search hit the expansion or time limit of its
    /// [`PathfindingConfig`](crate::PathfindingConfig) before it was resolved.
    #[error("search aborted after expanding {expanded} nodes")]
    SearchAborted {
        /// the number of Nodes that were expanded before giving up
        expanded: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, PathfindingError>;

//! A crate to find the shortest Path between two cells of a Grid with obstacles, using A*.
//!
//! ## Example
//! ```
//! use grid_astar::prelude::*;
//!
//! // a 5x5 Grid with a wall at x = 2, leaving a gap at the bottom
//! let mut grid = Grid::new(5, 5)?;
//! for y in 0..4 {
//!     grid.set_walkable(2, y, false)?;
//! }
//!
//! let path = find_path(&grid, (0, 0), (4, 0))?.expect("the wall has a gap");
//!
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 0));
//! assert!(path.iter().all(|&(x, y)| x != 2 || y == 4));
//! # Ok::<(), PathfindingError>(())
//! ```
//!
//! ## Searching
//! [`find_path`] uses the default [`PathfindingConfig`]: 8-directional movement where every step
//! costs `1`, diagonal steps may squeeze between two blocked cells and the heuristic is the
//! Manhattan distance. A [`PathFinder`](prelude::PathFinder) carries a different configuration:
//!
//! ```
//! use grid_astar::prelude::*;
//!
//! let grid = Grid::new(10, 10)?;
//! let finder = PathFinder::new(
//!     PathfindingConfig::default()
//!         .with_heuristic(Heuristic::Chebyshev)
//!         .with_corner_cutting(CornerCutting::Forbid)
//!         .with_max_expansions(1_000),
//! );
//!
//! let path = finder.find_path(&grid, (0, 0), (9, 3))?.unwrap();
//! assert_eq!(path.cost(), 9);
//! # Ok::<(), PathfindingError>(())
//! ```
//!
//! Not finding a Path is a regular outcome and is reported as `Ok(None)`. Errors are reserved for
//! invalid input (see [`PathfindingError`]) and aborted searches.
//!
//! The search never writes to the [`Grid`]: all intermediate costs live in the search itself.
//! This means any number of searches can run on the same Grid at once, which is what
//! [`PathFinder::find_paths`](prelude::PathFinder::find_paths) does with the `parallel` feature.
//!
//! ## Features
//! - `parallel` (default): run batches of searches with `rayon`.
//! - `log`: emit search outcomes and internal timings through the `log` crate.

#![warn(missing_docs)]

/// A shorthand for Points on the grid, as `(x, y)`.
pub type Point = (usize, usize);

/// The index of a cell in a [`Grid`]: `y * width + x`.
pub type NodeID = usize;

type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;
type NodeIDSet = hashbrown::HashSet<NodeID>;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod config;
pub use config::{CornerCutting, Heuristic, Movement, PathfindingConfig};

mod error;
pub use error::{PathfindingError, Result};

mod graph;
pub use graph::Node;

mod grid;
pub use grid::{find_path, Grid, PathFinder};

mod neighbors;

mod path;
pub use path::{Cost, Path};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_path, CornerCutting, Grid, Heuristic, Movement, Node, NodeID, Path, PathFinder,
        PathfindingConfig, PathfindingError, Point,
    };
}

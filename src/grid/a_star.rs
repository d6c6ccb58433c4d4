use super::Grid;
use crate::{
    neighbors::is_adjacent,
    path::{Cost, Path},
    NodeID, NodeIDMap, NodeIDSet, PathfindingConfig, PathfindingError, Point, Result,
};

use hashbrown::hash_map::Entry;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Finds the shortest Path from `start` to `goal` using the default [`PathfindingConfig`].
///
/// Returns `Ok(None)` if `goal` can't be reached from `start`.
///
/// ## Errors
/// - [`OutOfBounds`](PathfindingError::OutOfBounds) if `start` or `goal` are not on the Grid.
/// - [`UnreachableEndpoint`](PathfindingError::UnreachableEndpoint) if `start` or `goal` are
///   not walkable.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
///
/// let grid = Grid::new(5, 5)?;
/// let path = find_path(&grid, (0, 0), (4, 4))?.unwrap();
///
/// assert_eq!(path.cost(), 4);
/// assert_eq!(path.as_slice(), &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
/// # Ok::<(), PathfindingError>(())
/// ```
pub fn find_path(grid: &Grid, start: Point, goal: Point) -> Result<Option<Path<Point>>> {
    PathFinder::default().find_path(grid, start, goal)
}

/// Searches a [`Grid`] with a fixed [`PathfindingConfig`].
///
/// A PathFinder holds no state besides its config, so a single one can be reused for any number
/// of searches, on any number of Grids, from any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathFinder {
    config: PathfindingConfig,
}

impl PathFinder {
    /// Creates a PathFinder that searches according to `config`.
    pub fn new(config: PathfindingConfig) -> PathFinder {
        PathFinder { config }
    }

    /// The config this PathFinder searches with.
    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    /// Finds a Path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` if the goal can't be reached. The Path is guaranteed to be the shortest
    /// one if the configured [`Heuristic`](crate::Heuristic) never overestimates.
    ///
    /// Out of several equally short Paths, the same one is returned every time for the same Grid.
    ///
    /// ## Errors
    /// - [`OutOfBounds`](PathfindingError::OutOfBounds) if `start` or `goal` are not on the Grid.
    /// - [`UnreachableEndpoint`](PathfindingError::UnreachableEndpoint) if `start` or `goal`
    ///   are not walkable.
    /// - [`SearchAborted`](PathfindingError::SearchAborted) if a limit of the config was reached.
    pub fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Result<Option<Path<Point>>> {
        a_star_search(grid, &self.config, start, goal)
    }

    /// Runs [`find_path`](PathFinder::find_path) for every `(start, goal)` pair in `queries`.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature, the searches
    /// run concurrently on the `rayon` thread pool.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::prelude::*;
    ///
    /// let mut grid = Grid::new(4, 4)?;
    /// grid.set_walkable(3, 3, false)?;
    ///
    /// let results = PathFinder::default().find_paths(&grid, &[((0, 0), (3, 0)), ((0, 0), (3, 3))]);
    ///
    /// assert_eq!(results[0].as_ref().map(|path| path.as_ref().map(Path::cost)), Ok(Some(3)));
    /// assert_eq!(results[1], Err(PathfindingError::UnreachableEndpoint((3, 3))));
    /// # Ok::<(), PathfindingError>(())
    /// ```
    pub fn find_paths(
        &self,
        grid: &Grid,
        queries: &[(Point, Point)],
    ) -> Vec<Result<Option<Path<Point>>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|&(start, goal)| self.find_path(grid, start, goal))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, goal)| self.find_path(grid, start, goal))
                .collect()
        }
    }
}

/// The bookkeeping of a single search for a single Node.
#[derive(Clone, Copy, Debug)]
struct Scratch {
    g: Cost,
    h: Cost,
    f: Cost,
    parent: Option<NodeID>,
}

/// An entry of the open set.
///
/// Ordered so that the `BinaryHeap` pops the lowest `f` first, then the lowest `h`, then the
/// entry that was pushed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Element {
    id: NodeID,
    f: Cost,
    h: Cost,
    seq: usize,
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn a_star_search(
    grid: &Grid,
    config: &PathfindingConfig,
    start: Point,
    goal: Point,
) -> Result<Option<Path<Point>>> {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (Instant::now(), Instant::now());

    let start_id = grid.checked_id(start)?;
    let goal_id = grid.checked_id(goal)?;
    for (id, pos) in [(start_id, start), (goal_id, goal)] {
        if !grid.nodes[id].walkable {
            return Err(PathfindingError::UnreachableEndpoint(pos));
        }
    }

    if start_id == goal_id {
        return Ok(Some(Path::new(vec![start], 0)));
    }

    // a limit too large to be represented is no limit
    let deadline = config
        .time_limit
        .and_then(|limit| Instant::now().checked_add(limit));

    let mut scratch = NodeIDMap::<Scratch>::default();
    let mut closed = NodeIDSet::default();
    let mut open = BinaryHeap::new();
    let mut seq = 0;

    let h = config.heuristic.estimate(start, goal);
    scratch.insert(
        start_id,
        Scratch {
            g: 0,
            h,
            f: h,
            parent: None,
        },
    );
    open.push(Element {
        id: start_id,
        f: h,
        h,
        seq,
    });

    let mut expanded = 0;
    let mut found = false;
    let mut neighbors = Vec::with_capacity(8);

    re_trace!("a_star setup", timer);

    while let Some(Element {
        id: current_id, f, ..
    }) = open.pop()
    {
        // skip entries that were superseded by a cheaper one
        if closed.contains(&current_id) || f > scratch[&current_id].f {
            continue;
        }

        if current_id == goal_id {
            found = true;
            break;
        }

        let out_of_expansions = config.max_expansions.is_some_and(|max| expanded >= max);
        let out_of_time = deadline.is_some_and(|deadline| Instant::now() >= deadline);
        if out_of_expansions || out_of_time {
            #[cfg(feature = "log")]
            log::debug!(
                "search {:?} -> {:?} aborted after expanding {} nodes",
                start,
                goal,
                expanded
            );
            return Err(PathfindingError::SearchAborted { expanded });
        }

        closed.insert(current_id);
        expanded += 1;

        let current = grid.point(current_id);
        let tentative_g = scratch[&current_id].g + 1;

        neighbors.clear();
        grid.push_neighbors(current, config, &mut neighbors);

        for &other in neighbors.iter() {
            let other_id = grid.id_unchecked(other);
            if closed.contains(&other_id) {
                continue;
            }

            let (f, h) = match scratch.entry(other_id) {
                Entry::Occupied(entry) => {
                    let node = entry.into_mut();
                    if tentative_g >= node.g {
                        continue;
                    }
                    node.g = tentative_g;
                    node.f = node.g + node.h;
                    node.parent = Some(current_id);
                    (node.f, node.h)
                }
                Entry::Vacant(entry) => {
                    let h = config.heuristic.estimate(other, goal);
                    entry.insert(Scratch {
                        g: tentative_g,
                        h,
                        f: tentative_g + h,
                        parent: Some(current_id),
                    });
                    (tentative_g + h, h)
                }
            };

            seq += 1;
            open.push(Element {
                id: other_id,
                f,
                h,
                seq,
            });
        }
    }

    re_trace!("a_star main loop", timer);

    if !found {
        #[cfg(feature = "log")]
        log::debug!(
            "no path {:?} -> {:?} after expanding {} nodes",
            start,
            goal,
            expanded
        );
        return Ok(None);
    }

    let cost = scratch[&goal_id].g;
    let steps = {
        let mut steps = Vec::with_capacity(cost + 1);
        let mut current = Some(goal_id);
        while let Some(id) = current {
            steps.push(grid.point(id));
            current = scratch[&id].parent;
        }
        steps.reverse();
        steps
    };

    debug_assert_eq!(steps.len(), cost + 1);
    debug_assert!(steps
        .windows(2)
        .all(|pair| is_adjacent(pair[0], pair[1], config.movement)));

    re_trace!("a_star path reconstruction", timer);
    re_trace!("a_star total", outer_timer);

    #[cfg(feature = "log")]
    log::debug!(
        "path {:?} -> {:?} with cost {} after expanding {} nodes",
        start,
        goal,
        cost,
        expanded
    );

    Ok(Some(Path::new(steps, cost)))
}

use std::time::Duration;

use crate::{path::Cost, Point};

/// Options for how a [`PathFinder`](crate::PathFinder) searches.
///
/// The default reproduces the classic behavior: 8-directional movement with a cost of `1` per
/// step, diagonal steps squeezing between blocked cells are allowed, the Manhattan heuristic, and
/// no limits on the search.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
/// use std::time::Duration;
///
/// let config = PathfindingConfig::default()
///     .with_movement(Movement::FourWay)
///     .with_time_limit(Duration::from_millis(5));
///
/// assert_eq!(config.heuristic, Heuristic::Manhattan);
/// assert_eq!(config.max_expansions, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathfindingConfig {
    /// Which steps are allowed from a cell.
    pub movement: Movement,
    /// Whether diagonal steps may pass between two blocked cells.
    /// Only relevant with [`Movement::EightWay`].
    pub corner_cutting: CornerCutting,
    /// The estimate used to guide the search towards the goal.
    pub heuristic: Heuristic,
    /// Abort the search after this many Nodes were expanded.
    pub max_expansions: Option<usize>,
    /// Abort the search after it ran for this long.
    pub time_limit: Option<Duration>,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        PathfindingConfig {
            movement: Movement::EightWay,
            corner_cutting: CornerCutting::Allow,
            heuristic: Heuristic::Manhattan,
            max_expansions: None,
            time_limit: None,
        }
    }
}

impl PathfindingConfig {
    /// Returns the config with `movement` replaced.
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Returns the config with `corner_cutting` replaced.
    pub fn with_corner_cutting(mut self, corner_cutting: CornerCutting) -> Self {
        self.corner_cutting = corner_cutting;
        self
    }

    /// Returns the config with `heuristic` replaced.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Returns the config with an expansion limit.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Returns the config with a wall-clock limit.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }
}

/// The steps that can be taken from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Orthogonal and diagonal steps, each costing `1`.
    EightWay,
    /// Orthogonal steps only.
    FourWay,
}

/// Whether a diagonal step may pass the corner of a blocked cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerCutting {
    /// Diagonal steps only need the target cell to be walkable, even if both cells next to the
    /// step are blocked.
    Allow,
    /// Diagonal steps additionally need both orthogonally adjacent cells to be walkable.
    Forbid,
}

/// The estimate of the remaining cost from a cell to the goal.
///
/// Only [`Chebyshev`](Heuristic::Chebyshev) and [`Zero`](Heuristic::Zero) never overestimate
/// with [`Movement::EightWay`], so only they guarantee shortest Paths there.
/// [`Manhattan`](Heuristic::Manhattan) can overestimate diagonal distances, which makes the search
/// faster but may return a slightly longer Path around obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|dx| + |dy|`
    Manhattan,
    /// `max(|dx|, |dy|)`
    Chebyshev,
    /// Always `0`, turning the search into Dijkstra's algorithm.
    Zero,
}

impl Heuristic {
    /// Estimates the cost from `a` to `b`.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::Heuristic;
    ///
    /// assert_eq!(Heuristic::Manhattan.estimate((1, 5), (4, 1)), 7);
    /// assert_eq!(Heuristic::Chebyshev.estimate((1, 5), (4, 1)), 4);
    /// assert_eq!(Heuristic::Zero.estimate((1, 5), (4, 1)), 0);
    /// ```
    pub fn estimate(self, a: Point, b: Point) -> Cost {
        let dx = a.0.abs_diff(b.0);
        let dy = a.1.abs_diff(b.1);
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Chebyshev => dx.max(dy),
            Heuristic::Zero => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let config = PathfindingConfig::default();
        assert_eq!(config.movement, Movement::EightWay);
        assert_eq!(config.corner_cutting, CornerCutting::Allow);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert_eq!(config.max_expansions, None);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn builders() {
        let config = PathfindingConfig::default()
            .with_movement(Movement::FourWay)
            .with_corner_cutting(CornerCutting::Forbid)
            .with_heuristic(Heuristic::Zero)
            .with_max_expansions(12)
            .with_time_limit(Duration::from_secs(1));

        assert_eq!(config.movement, Movement::FourWay);
        assert_eq!(config.corner_cutting, CornerCutting::Forbid);
        assert_eq!(config.heuristic, Heuristic::Zero);
        assert_eq!(config.max_expansions, Some(12));
        assert_eq!(config.time_limit, Some(Duration::from_secs(1)));
    }

    #[test]
    fn heuristics_are_symmetric() {
        for h in [Heuristic::Manhattan, Heuristic::Chebyshev, Heuristic::Zero] {
            assert_eq!(h.estimate((0, 7), (3, 2)), h.estimate((3, 2), (0, 7)));
            assert_eq!(h.estimate((3, 3), (3, 3)), 0);
        }
    }
}

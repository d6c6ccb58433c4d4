use super::Cost;
use crate::{Grid, Node, Point};

/// A sequence of Points from a start to a goal, both inclusive, together with its cost.
///
/// Paths returned by a search are never empty. Each Point can be looked up in the
/// [`Grid`] that was searched to get its [`Node`], see [`nodes`](Path::nodes).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path<P> {
    pub(crate) path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    pub(crate) fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total cost of walking the Path.
    ///
    /// Since every step costs `1`, this is `len() - 1`.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Points on the Path, including start and goal.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the Path has no Points.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// An Iterator over the Points from start to goal.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// The Points of the Path, from start to goal.
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }

    /// The first Point of the Path.
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Point of the Path.
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }
}

impl Path<Point> {
    #[cfg(test)]
    pub(crate) fn from_slice(path: &[Point], cost: Cost) -> Path<Point> {
        Path::new(path.to_vec(), cost)
    }

    /// Resolves the Points of the Path to the Nodes of the Grid that was searched.
    ///
    /// Points that are not part of `grid` are skipped, which can only happen when a Path is used
    /// with a different Grid than the one it was found on.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::prelude::*;
    ///
    /// let grid = Grid::new(3, 3)?;
    /// let path = find_path(&grid, (0, 0), (2, 1))?.unwrap();
    ///
    /// assert!(path.nodes(&grid).all(|node| node.is_walkable()));
    /// assert_eq!(path.nodes(&grid).last().map(|node| node.pos()), Some((2, 1)));
    /// # Ok::<(), PathfindingError>(())
    /// ```
    pub fn nodes<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a Node> + 'a {
        self.path.iter().filter_map(move |&pos| grid.node(pos))
    }
}

impl<P> std::ops::Index<usize> for Path<P> {
    type Output = P;
    #[track_caller]
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl<P> From<Path<P>> for Vec<P> {
    fn from(path: Path<P>) -> Vec<P> {
        path.path
    }
}

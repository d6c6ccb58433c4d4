mod a_star;
pub use a_star::{find_path, PathFinder};

use crate::{
    neighbors::step,
    CornerCutting, Movement, Node, NodeID, PathfindingConfig, PathfindingError, Point, Result,
};

/// A fixed-size rectangle of [`Node`]s, each of which is either walkable or blocked.
///
/// The Grid only stores the layout of the search space. Searches borrow it immutably and keep
/// their own bookkeeping, so a Grid can be shared between threads and searched concurrently.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
///
/// let mut grid = Grid::new(4, 3)?;
/// grid.set_walkable(1, 1, false)?;
///
/// assert_eq!(grid.len(), 12);
/// assert!(!grid.is_walkable((1, 1))?);
/// assert_eq!(grid.neighbors((0, 0))?, vec![(1, 0), (0, 1)]);
///
/// assert!(grid.set_walkable(4, 0, false).is_err());
/// # Ok::<(), PathfindingError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
}

impl Grid {
    /// Creates a Grid of `width` x `height` walkable Nodes.
    ///
    /// Fails with [`InvalidDimensions`](PathfindingError::InvalidDimensions) if either dimension
    /// is `0`, or the number of cells does not fit into a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(PathfindingError::InvalidDimensions { width, height })?;

        let mut nodes = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node::new(nodes.len(), (x, y), true));
            }
        }

        Ok(Grid {
            width,
            height,
            nodes,
        })
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of Nodes, `width * height`. Never `0`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, since a Grid can't be constructed without cells.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `pos` lies within the Grid.
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// The id of the Node at `pos`, or `None` if `pos` is out of bounds.
    pub fn id_of(&self, pos: Point) -> Option<NodeID> {
        self.contains(pos).then(|| pos.1 * self.width + pos.0)
    }

    /// The Node at `pos`, or `None` if `pos` is out of bounds.
    pub fn node(&self, pos: Point) -> Option<&Node> {
        self.id_of(pos).map(|id| &self.nodes[id])
    }

    /// An Iterator over all Nodes, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Whether the Node at `pos` is walkable.
    pub fn is_walkable(&self, pos: Point) -> Result<bool> {
        Ok(self.nodes[self.checked_id(pos)?].walkable)
    }

    /// Marks the Node at `(x, y)` as walkable or blocked.
    ///
    /// Fails with [`OutOfBounds`](PathfindingError::OutOfBounds) if `(x, y)` is not part of the
    /// Grid.
    pub fn set_walkable(&mut self, x: usize, y: usize, walkable: bool) -> Result<()> {
        let id = self.checked_id((x, y))?;
        self.nodes[id].walkable = walkable;
        Ok(())
    }

    /// The walkable Nodes adjacent to `pos` in all 8 directions.
    ///
    /// The order is fixed: the row above from left to right, then left and right, then the row
    /// below from left to right. Diagonal neighbors are included even if both Nodes next to the
    /// diagonal step are blocked.
    pub fn neighbors(&self, pos: Point) -> Result<Vec<Point>> {
        let mut ret = Vec::with_capacity(8);
        self.neighbors_with(pos, &PathfindingConfig::default(), &mut ret)?;
        Ok(ret)
    }

    /// Appends the walkable neighbors of `pos` to `target`, using the movement rules of `config`.
    ///
    /// The order is the same as in [`neighbors`](Grid::neighbors), with the excluded directions
    /// left out.
    pub fn neighbors_with(
        &self,
        pos: Point,
        config: &PathfindingConfig,
        target: &mut Vec<Point>,
    ) -> Result<()> {
        self.checked_id(pos)?;
        self.push_neighbors(pos, config, target);
        Ok(())
    }

    /// [`neighbors_with`](Grid::neighbors_with) for a `pos` that is known to be in bounds.
    pub(crate) fn push_neighbors(
        &self,
        pos: Point,
        config: &PathfindingConfig,
        target: &mut Vec<Point>,
    ) {
        let forbid_corners = config.movement == Movement::EightWay
            && config.corner_cutting == CornerCutting::Forbid;

        for &delta in config.movement.directions() {
            let Some(other) = step(pos, delta, self.width, self.height) else {
                continue;
            };
            if !self.walkable_unchecked(other) {
                continue;
            }
            if forbid_corners && delta.0 != 0 && delta.1 != 0 {
                // both orthogonal cells of a diagonal step are in bounds if its target is
                if !self.walkable_unchecked((other.0, pos.1))
                    || !self.walkable_unchecked((pos.0, other.1))
                {
                    continue;
                }
            }
            target.push(other);
        }
    }

    pub(crate) fn checked_id(&self, pos: Point) -> Result<NodeID> {
        self.id_of(pos).ok_or(PathfindingError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    /// The id of `pos`, which must be in bounds.
    pub(crate) fn id_unchecked(&self, pos: Point) -> NodeID {
        debug_assert!(self.contains(pos));
        pos.1 * self.width + pos.0
    }

    pub(crate) fn walkable_unchecked(&self, pos: Point) -> bool {
        self.nodes[self.id_unchecked(pos)].walkable
    }

    pub(crate) fn point(&self, id: NodeID) -> Point {
        self.nodes[id].pos
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = Node;
    #[track_caller]
    fn index(&self, pos: Point) -> &Node {
        match self.node(pos) {
            Some(node) => node,
            None => panic!(
                "{:?} is outside of the {}x{} grid",
                pos, self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(PathfindingError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn one_node_per_cell() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());

        for (id, node) in grid.nodes().enumerate() {
            assert_eq!(node.id(), id);
            assert_eq!(grid.id_of(node.pos()), Some(id));
            assert_eq!(grid.point(id), node.pos());
            assert!(node.is_walkable());
        }
        assert_eq!(grid[(3, 2)].pos(), (3, 2));
        assert_eq!(grid.node((4, 0)), None);
        assert_eq!(grid.node((0, 3)), None);
    }

    #[test]
    fn set_walkable() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_walkable(1, 2, false).unwrap();
        assert_eq!(grid.is_walkable((1, 2)), Ok(false));
        assert!(!grid[(1, 2)].is_walkable());

        grid.set_walkable(1, 2, true).unwrap();
        assert_eq!(grid.is_walkable((1, 2)), Ok(true));

        assert_eq!(
            grid.set_walkable(3, 0, false),
            Err(PathfindingError::OutOfBounds {
                pos: (3, 0),
                width: 3,
                height: 3
            })
        );
        assert!(grid.is_walkable((0, 3)).is_err());
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.neighbors((1, 1)).unwrap(),
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
        assert_eq!(grid.neighbors((2, 2)).unwrap(), vec![(1, 1), (2, 1), (1, 2)]);
        assert!(grid.neighbors((3, 1)).is_err());
    }

    #[test]
    fn neighbors_skip_blocked() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_walkable(1, 0, false).unwrap();
        grid.set_walkable(0, 1, false).unwrap();

        // the diagonal squeezes between (1, 0) and (0, 1)
        assert_eq!(grid.neighbors((0, 0)).unwrap(), vec![(1, 1)]);

        let config = PathfindingConfig::default().with_corner_cutting(CornerCutting::Forbid);
        let mut buf = vec![];
        grid.neighbors_with((0, 0), &config, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn forbid_corner_cutting_with_one_blocked_side() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_walkable(1, 0, false).unwrap();

        let config = PathfindingConfig::default().with_corner_cutting(CornerCutting::Forbid);
        let mut buf = vec![];
        grid.neighbors_with((0, 0), &config, &mut buf).unwrap();
        assert_eq!(buf, vec![(0, 1)]);
    }

    #[test]
    fn neighbor_ids_match_positions() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_walkable(1, 1, false).unwrap();

        let mut buf = vec![];
        for movement in [Movement::EightWay, Movement::FourWay] {
            let config = PathfindingConfig::default().with_movement(movement);
            for node in grid.nodes() {
                buf.clear();
                grid.push_neighbors(node.pos(), &config, &mut buf);
                for &other in buf.iter() {
                    assert_eq!(Some(grid.id_unchecked(other)), grid.id_of(other));
                }
            }
        }
    }

    #[test]
    fn four_way_neighbors() {
        let grid = Grid::new(3, 3).unwrap();
        let config = PathfindingConfig::default().with_movement(Movement::FourWay);
        let mut buf = vec![];
        grid.neighbors_with((1, 1), &config, &mut buf).unwrap();
        assert_eq!(buf, vec![(1, 0), (0, 1), (2, 1), (1, 2)]);
    }
}

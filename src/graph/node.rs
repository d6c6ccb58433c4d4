use crate::{NodeID, Point};

/// A single cell of a [`Grid`](crate::Grid).
///
/// Nodes are created together with their Grid and live as long as it does. Only the walkability
/// of a Node can change, through [`Grid::set_walkable`](crate::Grid::set_walkable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) id: NodeID,
    pub(crate) pos: Point,
    pub(crate) walkable: bool,
}

impl Node {
    pub(crate) fn new(id: NodeID, pos: Point, walkable: bool) -> Node {
        Node { id, pos, walkable }
    }

    /// The index of this Node in its Grid.
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// The `(x, y)` position of this Node.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The x coordinate of this Node.
    pub fn x(&self) -> usize {
        self.pos.0
    }

    /// The y coordinate of this Node.
    pub fn y(&self) -> usize {
        self.pos.1
    }

    /// Whether a Path may pass through this Node.
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }
}

#[test]
fn coordinates() {
    let node = Node::new(7, (3, 1), false);
    assert_eq!(node.id(), 7);
    assert_eq!(node.pos(), (3, 1));
    assert_eq!((node.x(), node.y()), (3, 1));
    assert!(!node.is_walkable());
}

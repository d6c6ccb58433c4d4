use crate::{Movement, Point};

/// The 8 directions, row by row starting above the cell.
///
/// The order decides which of several equally good Paths a search returns, so it must not change.
const EIGHT_WAY: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The orthogonal subset of [`EIGHT_WAY`], in the same order.
const FOUR_WAY: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl Movement {
    pub(crate) fn directions(self) -> &'static [(isize, isize)] {
        match self {
            Movement::EightWay => &EIGHT_WAY,
            Movement::FourWay => &FOUR_WAY,
        }
    }
}

/// Moves `point` by `delta`, if the result stays within `width` x `height`.
pub(crate) fn step(
    (x, y): Point,
    (dx, dy): (isize, isize),
    width: usize,
    height: usize,
) -> Option<Point> {
    let x = x.checked_add_signed(dx)?;
    let y = y.checked_add_signed(dy)?;
    (x < width && y < height).then_some((x, y))
}

/// Whether two Points are a single step of `movement` apart.
pub(crate) fn is_adjacent(a: Point, b: Point, movement: Movement) -> bool {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    match movement {
        Movement::EightWay => dx.max(dy) == 1,
        Movement::FourWay => dx + dy == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clamps_to_bounds() {
        assert_eq!(step((0, 0), (-1, 0), 3, 3), None);
        assert_eq!(step((0, 0), (0, -1), 3, 3), None);
        assert_eq!(step((2, 1), (1, 0), 3, 3), None);
        assert_eq!(step((1, 2), (0, 1), 3, 3), None);
        assert_eq!(step((1, 1), (1, 1), 3, 3), Some((2, 2)));
        assert_eq!(step((1, 1), (-1, -1), 3, 3), Some((0, 0)));
    }

    #[test]
    fn directions_are_unique_single_steps() {
        for movement in [Movement::EightWay, Movement::FourWay] {
            let dirs = movement.directions();
            for (i, a) in dirs.iter().enumerate() {
                assert_ne!(*a, (0, 0));
                assert!(dirs[i + 1..].iter().all(|b| b != a));
                let target = step((5, 5), *a, 10, 10).unwrap();
                assert!(is_adjacent((5, 5), target, movement));
            }
        }
        assert_eq!(Movement::EightWay.directions().len(), 8);
        assert_eq!(Movement::FourWay.directions().len(), 4);
    }

    #[test]
    fn adjacency() {
        assert!(is_adjacent((1, 1), (2, 2), Movement::EightWay));
        assert!(!is_adjacent((1, 1), (2, 2), Movement::FourWay));
        assert!(is_adjacent((1, 1), (1, 0), Movement::FourWay));
        assert!(!is_adjacent((1, 1), (1, 1), Movement::EightWay));
        assert!(!is_adjacent((0, 0), (2, 0), Movement::EightWay));
    }
}

use std::collections::{HashSet, VecDeque};

use static_assertions::const_assert;

use crate::basic::{Board, Dir, GridPoint, Point};

pub use builder::{Builder, BuilderError};

pub mod builder;

#[derive(Clone, Debug)]
pub struct Body {
    /// Head first, tail last
    cells: VecDeque<GridPoint>,
    /// Same cells as `cells`, one fewer when the head
    /// has run into the rest of the body
    occupied: HashSet<GridPoint>,
    /// `cells` as they were before the last call to
    /// `advance`, only used to place segments between ticks
    prev_cells: VecDeque<GridPoint>,

    /// Direction the snake is currently going
    dir: Dir,
    /// Queued directions not yet applied, at most one is
    /// consumed per call to `advance`
    dir_buffer: VecDeque<Dir>,
    /// Number of ticks during which the tail stays put
    grow: usize,
}

impl Body {
    pub const MIN_LEN: usize = 3;
    pub const DIR_BUFFER_LEN: usize = 3;

    // Builder guarantees a head and a tail that are distinct cells
    fn new(cells: VecDeque<GridPoint>, dir: Dir) -> Self {
        Self {
            occupied: cells.iter().copied().collect(),
            prev_cells: cells.clone(),
            cells,
            dir,
            dir_buffer: VecDeque::with_capacity(Self::DIR_BUFFER_LEN),
            grow: 0,
        }
    }

    pub fn head(&self) -> GridPoint {
        self.cells[0]
    }

    pub fn tail(&self) -> GridPoint {
        self.cells[self.cells.len() - 1]
    }

    pub fn cells(&self) -> &VecDeque<GridPoint> {
        &self.cells
    }

    pub fn prev_cells(&self) -> &VecDeque<GridPoint> {
        &self.prev_cells
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn pending_growth(&self) -> usize {
        self.grow
    }

    pub fn contains(&self, pos: GridPoint) -> bool {
        self.occupied.contains(&pos)
    }

    /// Directions beyond the capacity of the buffer are dropped
    pub fn buffer_dir(&mut self, dir: Dir) {
        if self.dir_buffer.len() < Self::DIR_BUFFER_LEN {
            self.dir_buffer.push_back(dir);
        }
    }

    /// The tail stays in place for the next `amount` advances
    pub fn grow(&mut self, amount: usize) {
        self.grow += amount;
    }

    pub fn advance(&mut self) {
        self.prev_cells.clone_from(&self.cells);

        if let Some(dir) = self.dir_buffer.pop_front() {
            // no 180° turns
            if dir != -self.dir {
                self.dir = dir;
            }
        }

        let new_head = self.head().translate(self.dir, 1);

        if self.grow > 0 {
            self.grow -= 1;
        } else if let Some(tail) = self.cells.pop_back() {
            // the tail leaves before the head arrives, following
            // the tail into the cell it just vacated is safe
            self.occupied.remove(&tail);
        }

        self.cells.push_front(new_head);
        self.occupied.insert(new_head);
    }

    pub fn is_wall_colliding(&self, board: &Board) -> bool {
        !board.is_in_bounds(self.head())
    }

    pub fn is_self_colliding(&self) -> bool {
        self.occupied.len() < self.cells.len()
    }

    /// Position of each segment `frac` of the way between the
    /// previous tick and the current one
    pub fn interpolated_cells(&self, frac: f32) -> Vec<Point> {
        let frac = frac.clamp(0., 1.);
        let last_prev = self.prev_cells.back().copied();
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                // a segment added by growth starts where the tail was
                let prev = self.prev_cells.get(i).copied().or(last_prev).unwrap_or(pos);
                Point::from(prev).lerp(Point::from(pos), frac)
            })
            .collect()
    }
}

const_assert!(Body::MIN_LEN >= 2);
const_assert!(Body::DIR_BUFFER_LEN > 0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn straight_body(head: (isize, isize), dir: Dir, len: usize) -> Body {
        Builder::default()
            .pos(GridPoint::new(head.0, head.1))
            .dir(dir)
            .len(len)
            .build(&Board::new(20, 20).unwrap())
            .unwrap()
    }

    fn body_from(cells: &[(isize, isize)], dir: Dir) -> Body {
        Body::new(cells.iter().map(|&(x, y)| GridPoint::new(x, y)).collect(), dir)
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut body = straight_body((5, 5), R, 3);
        body.advance();
        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), GridPoint::new(6, 5));
        assert_eq!(body.tail(), GridPoint::new(4, 5));
        assert!(!body.is_self_colliding());
        assert_eq!(
            body.prev_cells().iter().copied().collect::<Vec<_>>(),
            vec![GridPoint::new(5, 5), GridPoint::new(4, 5), GridPoint::new(3, 5)]
        );
    }

    #[test]
    fn test_growth_consumed_one_per_advance() {
        let mut body = straight_body((5, 5), R, 3);
        body.grow(2);
        body.advance();
        assert_eq!(body.len(), 4);
        assert_eq!(body.pending_growth(), 1);
        body.advance();
        assert_eq!(body.len(), 5);
        assert_eq!(body.pending_growth(), 0);
        body.advance();
        assert_eq!(body.len(), 5);
        assert_eq!(body.tail(), GridPoint::new(4, 5));
    }

    #[test]
    fn test_length_under_random_legal_turns() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut body = straight_body((10, 10), U, 4);
        for _ in 0..50 {
            let dir = Dir::ALL[rng.gen_range(0..4)];
            let growing = rng.gen_bool(0.3);
            if growing {
                body.grow(1);
            }
            let len = body.len();
            body.buffer_dir(dir);
            body.advance();
            assert_eq!(body.len(), len + growing as usize);
        }
    }

    #[test]
    fn test_reverse_is_discarded() {
        let mut body = straight_body((5, 5), R, 3);
        body.buffer_dir(L);
        body.advance();
        assert_eq!(body.dir(), R);
        assert_eq!(body.head(), GridPoint::new(6, 5));
        assert!(!body.is_self_colliding());

        body.buffer_dir(U);
        body.advance();
        assert_eq!(body.dir(), U);
        assert_eq!(body.head(), GridPoint::new(6, 4));
    }

    #[test]
    fn test_dir_buffer_capacity() {
        let mut body = straight_body((10, 10), R, 3);
        for dir in [U, L, D, R] {
            body.buffer_dir(dir);
        }
        body.advance();
        body.advance();
        body.advance();
        // U, L, D were applied; R was dropped
        assert_eq!(body.dir(), D);
        body.advance();
        assert_eq!(body.dir(), D);
        assert_eq!(body.head(), GridPoint::new(9, 11));
    }

    #[test]
    fn test_following_tail_is_not_a_collision() {
        // 2x2 loop, the head moves into the cell the tail leaves
        let mut body = body_from(&[(1, 0), (0, 0), (0, 1), (1, 1)], R);
        body.buffer_dir(D);
        body.advance();
        assert_eq!(body.head(), GridPoint::new(1, 1));
        assert!(!body.is_self_colliding());
    }

    #[test]
    fn test_self_collision_iff_head_in_body() {
        // U-shape, turning down bites the body
        let mut body = body_from(&[(1, 0), (0, 0), (0, 1), (1, 1), (2, 1)], R);
        body.buffer_dir(D);
        body.advance();
        assert!(body.is_self_colliding());
        assert!(body.cells().iter().skip(1).any(|&c| c == body.head()));

        let mut body = body_from(&[(1, 0), (0, 0), (0, 1), (1, 1), (2, 1)], R);
        body.advance();
        assert!(!body.is_self_colliding());
        assert!(!body.cells().iter().skip(1).any(|&c| c == body.head()));
    }

    #[test]
    fn test_wall_collision() {
        let board = Board::new(5, 5).unwrap();
        let mut body = body_from(&[(4, 2), (3, 2), (2, 2)], R);
        assert!(!body.is_wall_colliding(&board));
        body.advance();
        assert!(body.is_wall_colliding(&board));
    }

    #[test]
    fn test_interpolated_cells() {
        let mut body = straight_body((5, 5), R, 3);
        body.grow(1);
        body.advance();
        let halfway = body.interpolated_cells(0.5);
        assert_eq!(halfway.len(), 4);
        assert_eq!(halfway[0], Point { x: 5.5, y: 5. });
        assert_eq!(halfway[2], Point { x: 3.5, y: 5. });
        // new segment appears where the tail was
        assert_eq!(halfway[3], Point { x: 3., y: 5. });
    }
}

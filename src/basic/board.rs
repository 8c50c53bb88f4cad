use std::collections::HashSet;

use num_integer::Integer;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

#[derive(Debug, Display, Error)]
#[display(fmt = "board dimensions must be positive, got {}x{}", width, height)]
pub struct BoardError {
    pub width: isize,
    pub height: isize,
}

/// Bounds of the playing field along with the cells that
/// can't be entered. Obstacles are owned by whoever places
/// them, the autopilot only ever reads them
#[derive(Clone, Debug)]
pub struct Board {
    dim: GridDim,
    obstacles: HashSet<GridPoint>,
}

impl Board {
    pub fn new(width: isize, height: isize) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError { width, height });
        }
        Ok(Self {
            dim: GridDim::new(width, height),
            obstacles: HashSet::new(),
        })
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    pub fn obstacles(&self) -> &HashSet<GridPoint> {
        &self.obstacles
    }

    /// Returns false if the cell was already an obstacle
    pub fn add_obstacle(&mut self, pos: GridPoint) -> bool {
        self.obstacles.insert(pos)
    }

    pub fn remove_obstacle(&mut self, pos: GridPoint) -> bool {
        self.obstacles.remove(&pos)
    }

    pub fn is_in_bounds(&self, pos: GridPoint) -> bool {
        self.dim.contains(pos)
    }

    pub fn is_obstacle(&self, pos: GridPoint) -> bool {
        self.obstacles.contains(&pos)
    }

    pub fn is_blocked(&self, pos: GridPoint) -> bool {
        !self.is_in_bounds(pos) || self.is_obstacle(pos)
    }

    /// Uniformly random cell that is neither an obstacle nor in `occupied`
    pub fn random_free_spot(
        &self,
        occupied: impl IntoIterator<Item = GridPoint>,
        rng: &mut impl Rng,
    ) -> Option<GridPoint> {
        let mut occupied_cells: Vec<_> = occupied
            .into_iter()
            .chain(self.obstacles.iter().copied())
            .filter(|pos| self.is_in_bounds(*pos))
            .collect();
        // the skipping below relies on row-major order
        occupied_cells.sort_unstable();
        occupied_cells.dedup();

        let free_spaces = self.dim.area() - occupied_cells.len();
        if free_spaces == 0 {
            return None;
        }

        let mut new_idx = (0..free_spaces).sample_single(rng);
        for GridPoint { x, y } in occupied_cells {
            let idx = (y * self.dim.x + x) as usize;
            if idx <= new_idx {
                new_idx += 1;
            }
        }

        let (y, x) = (new_idx as isize).div_rem(&self.dim.x);
        Some(GridPoint { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_non_positive_dims_rejected() {
        assert!(Board::new(0, 10).is_err());
        assert!(Board::new(10, -1).is_err());
        let err = Board::new(-2, 3).unwrap_err();
        assert_eq!(err.to_string(), "board dimensions must be positive, got -2x3");
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_blocked() {
        let mut board = Board::new(4, 3).unwrap();
        assert!(board.add_obstacle(GridPoint::new(1, 1)));
        assert!(!board.add_obstacle(GridPoint::new(1, 1)));

        assert!(board.is_in_bounds(GridPoint::new(3, 2)));
        assert!(!board.is_in_bounds(GridPoint::new(4, 2)));
        assert!(!board.is_in_bounds(GridPoint::new(0, -1)));

        assert!(board.is_blocked(GridPoint::new(1, 1)));
        assert!(board.is_blocked(GridPoint::new(-1, 0)));
        assert!(!board.is_blocked(GridPoint::new(0, 0)));

        assert!(board.remove_obstacle(GridPoint::new(1, 1)));
        assert!(!board.is_obstacle(GridPoint::new(1, 1)));
    }

    #[test]
    fn test_random_free_spot_avoids_occupied() {
        let mut board = Board::new(3, 3).unwrap();
        board.add_obstacle(GridPoint::new(0, 0));
        board.add_obstacle(GridPoint::new(2, 2));
        let occupied = [GridPoint::new(1, 0), GridPoint::new(1, 1), GridPoint::new(0, 2)];

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let spot = board.random_free_spot(occupied, &mut rng).unwrap();
            assert!(!board.is_blocked(spot), "{:?}", spot);
            assert!(!occupied.contains(&spot), "{:?}", spot);
        }
    }

    #[test]
    fn test_random_free_spot_full_board() {
        let board = Board::new(2, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let occupied = [GridPoint::new(0, 0), GridPoint::new(1, 0)];
        assert_eq!(board.random_free_spot(occupied, &mut rng), None);
        assert_eq!(
            board.random_free_spot([GridPoint::new(0, 0)], &mut rng),
            Some(GridPoint::new(1, 0))
        );
    }
}

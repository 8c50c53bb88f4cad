mod a_star;
mod safety;

use crate::basic::{Board, Dir, GridPoint};
use std::collections::{HashSet, VecDeque};

pub use a_star::AStar;
pub use safety::is_path_safe;

/// Cells to walk through, excluding the starting cell and
/// including the target
pub type Path = VecDeque<GridPoint>;

pub trait PathFinder {
    /// `dir` is the direction the snake is currently going in,
    /// the first step of the path never reverses it.
    /// `off_limits` is checked in addition to the board's obstacles,
    /// the target itself is always allowed
    fn find_path(
        &self,
        start: GridPoint,
        target: GridPoint,
        board: &Board,
        off_limits: &HashSet<GridPoint>,
        dir: Dir,
    ) -> Option<Path>;
}

/// Direction of the first step of `path`, None for an empty path
pub fn first_dir(start: GridPoint, path: &Path) -> Option<Dir> {
    path.front().and_then(|next| start.dir_to(*next))
}

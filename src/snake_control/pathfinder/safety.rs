use super::{Path, PathFinder};
use crate::basic::Board;
use crate::snake::Body;
use std::collections::HashSet;

/// Whether the snake can still reach its own tail after following
/// `path` and growing by one at its end. Growth the body still has
/// pending holds the tail in place during the replay. Works on a
/// copy of the body's cells, `body` is left untouched
pub fn is_path_safe(pathfinder: &dyn PathFinder, body: &Body, path: &Path, board: &Board) -> bool {
    let mut cells = body.cells().clone();
    let mut growth = body.pending_growth();
    for &pos in path {
        cells.push_front(pos);
        if growth > 0 {
            growth -= 1;
        } else {
            cells.pop_back();
        }
    }

    // eating holds the tail in place for one more tick
    let (head, tail) = match (cells.front().copied(), cells.back().copied()) {
        (Some(head), Some(tail)) => (head, tail),
        _ => return false,
    };
    cells.push_back(tail);

    let before_last = match path.len() {
        0 | 1 => body.head(),
        len => path[len - 2],
    };
    let dir = path
        .back()
        .and_then(|last| before_last.dir_to(*last))
        .unwrap_or_else(|| body.dir());

    let off_limits: HashSet<_> = cells
        .iter()
        .copied()
        .filter(|pos| *pos != head && *pos != tail)
        .collect();

    pathfinder
        .find_path(head, tail, board, &off_limits, dir)
        .map_or(false, |escape| !escape.is_empty())
}

use std::collections::HashSet;

use static_assertions::assert_impl_all;

use crate::basic::{Board, Dir, GridPoint};
use crate::snake::Body;
use crate::snake_control::pathfinder::{first_dir, is_path_safe, AStar, Path, PathFinder};

/// Which rule produced a decision
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Shortest path to the target, after checking that
    /// eating there leaves a way back to the tail
    Target,
    /// Chase the tail, it keeps moving out of the way
    Tail,
    /// Any free neighboring cell, or straight back if none
    Panic,
}

#[derive(Clone, Debug)]
pub struct Decision {
    pub dir: Dir,
    pub strategy: Strategy,
    /// The path being followed, for debug overlays
    pub path: Option<Path>,
}

pub struct Autopilot {
    pub pathfinder: Box<dyn PathFinder + Send + Sync>,
}

assert_impl_all!(Autopilot: Send, Sync);
assert_impl_all!(AStar: Send, Sync);
assert_impl_all!(Board: Send, Sync);
assert_impl_all!(Body: Send, Sync);

impl Default for Autopilot {
    fn default() -> Self {
        Self { pathfinder: Box::new(AStar) }
    }
}

impl Autopilot {
    pub fn decide(&self, body: &Body, board: &Board, target: GridPoint) -> Dir {
        self.plan(body, board, Some(target)).dir
    }

    /// Never modifies the body, the caller is expected to
    /// buffer the returned direction
    pub fn plan(&self, body: &Body, board: &Board, target: Option<GridPoint>) -> Decision {
        let head = body.head();
        let dir = body.dir();
        let mut off_limits: HashSet<GridPoint> = body.cells().iter().copied().collect();

        if let Some(target) = target {
            if let Some(path) = self.pathfinder.find_path(head, target, board, &off_limits, dir) {
                if let Some(step) = first_dir(head, &path) {
                    if is_path_safe(&*self.pathfinder, body, &path, board) {
                        tracing::debug!(?head, ?target, len = path.len(), "following path to target");
                        return Decision {
                            dir: step,
                            strategy: Strategy::Target,
                            path: Some(path),
                        };
                    }
                    tracing::debug!(?head, ?target, "path to target would trap the snake");
                }
            }
        }

        // while growing the tail stays put for `pending_growth` ticks,
        // the head may only arrive once it has started moving again
        let tail = body.tail();
        let pending_growth = body.pending_growth();
        if pending_growth == 0 {
            off_limits.remove(&tail);
        }
        if let Some(path) = self.pathfinder.find_path(head, tail, board, &off_limits, dir) {
            if let Some(step) = first_dir(head, &path).filter(|_| path.len() > pending_growth) {
                tracing::debug!(?head, ?tail, "following tail");
                return Decision {
                    dir: step,
                    strategy: Strategy::Tail,
                    path: Some(path),
                };
            }
        }

        let panic_dir = Dir::iter()
            .filter(|d| *d != -dir)
            .find(|d| {
                let next = head.translate(*d, 1);
                !board.is_blocked(next) && !off_limits.contains(&next)
            })
            .unwrap_or(-dir);
        tracing::warn!(?head, ?panic_dir, "no path to target or tail");
        Decision {
            dir: panic_dir,
            strategy: Strategy::Panic,
            path: None,
        }
    }
}

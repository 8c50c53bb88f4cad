use super::{Path, PathFinder};
use crate::basic::{Board, Dir, GridPoint};
use std::cmp::Ordering;
use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

struct SearchNode {
    pos: GridPoint,
    /// Index into the arena
    parent: Option<usize>,
    /// Direction in which this node was entered
    dir: Dir,
    /// Steps from the start
    len: usize,
}

#[derive(Eq, PartialEq)]
struct OpenEntry {
    /// len + heuristic
    cost: usize,
    heuristic: usize,
    /// Insertion order, breaks the remaining ties
    seq: usize,
    node: usize,
}

// reversed, BinaryHeap is a max-heap
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest paths on a 4-connected board where the snake
/// never turns back on itself
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl AStar {
    fn heuristic(a: GridPoint, b: GridPoint) -> usize {
        a.manhattan_distance(b)
    }

    fn get_path(arena: &[SearchNode], mut idx: usize) -> Path {
        let mut path = VecDeque::with_capacity(arena[idx].len);
        // the root is the start, which isn't part of the path
        while let Some(parent) = arena[idx].parent {
            path.push_front(arena[idx].pos);
            idx = parent;
        }
        path
    }
}

impl PathFinder for AStar {
    fn find_path(
        &self,
        start: GridPoint,
        target: GridPoint,
        board: &Board,
        off_limits: &HashSet<GridPoint>,
        dir: Dir,
    ) -> Option<Path> {
        let mut arena = vec![SearchNode {
            pos: start,
            parent: None,
            dir,
            len: 0,
        }];
        let mut shortest: HashMap<GridPoint, usize> = HashMap::new();
        shortest.insert(start, 0);

        let mut open = BinaryHeap::new();
        let mut seq = 0;
        open.push(OpenEntry {
            cost: Self::heuristic(start, target),
            heuristic: Self::heuristic(start, target),
            seq,
            node: 0,
        });

        while let Some(OpenEntry { node, .. }) = open.pop() {
            let SearchNode { pos, dir, len, .. } = arena[node];

            // a shorter way here was found after this entry was queued
            if shortest.get(&pos).map_or(false, |&best| len > best) {
                continue;
            }

            if pos == target {
                tracing::trace!(?start, ?target, len, searched = arena.len(), "path found");
                return Some(Self::get_path(&arena, node));
            }

            for new_dir in Dir::iter().filter(|d| *d != -dir) {
                let new_pos = pos.translate(new_dir, 1);
                if new_pos != target && (board.is_blocked(new_pos) || off_limits.contains(&new_pos)) {
                    continue;
                }

                let new_len = len + 1;
                match shortest.entry(new_pos) {
                    Occupied(occupied) if *occupied.get() <= new_len => continue,
                    Occupied(mut occupied) => {
                        occupied.insert(new_len);
                    }
                    Vacant(vacant) => {
                        vacant.insert(new_len);
                    }
                }

                arena.push(SearchNode {
                    pos: new_pos,
                    parent: Some(node),
                    dir: new_dir,
                    len: new_len,
                });
                seq += 1;
                let heuristic = Self::heuristic(new_pos, target);
                open.push(OpenEntry {
                    cost: new_len + heuristic,
                    heuristic,
                    seq,
                    node: arena.len() - 1,
                });
            }
        }

        tracing::trace!(?start, ?target, searched = arena.len(), "no path");
        None
    }
}

use super::dir::Dir;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Board dimensions, `x` is the width and `y` the height
pub type GridDim = GridPoint;

impl GridPoint {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dx, dy) = dir.delta();
        let dist = dist as isize;
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    // None if the two points aren't neighbors
    pub fn dir_to(self, other: Self) -> Option<Dir> {
        Dir::iter().find(|dir| self.translate(*dir, 1) == other)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    pub fn area(self) -> usize {
        (self.x.max(0) * self.y.max(0)) as usize
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[test]
fn test_manhattan_distance() {
    [
        ((0, 0), (0, 0), 0),
        ((0, 0), (0, 1), 1),
        ((0, 0), (1, 0), 1),
        ((0, 0), (0, 10), 10),
        ((0, 10), (0, 0), 10),
        ((1, 1), (2, 2), 2),
        ((4, 1), (1, 3), 5),
    ]
    .iter()
    .for_each(|&((x1, y1), (x2, y2), d)| {
        let p1 = GridPoint::new(x1, y1);
        let p2 = GridPoint::new(x2, y2);
        assert_eq!(p1.manhattan_distance(p2), d);
        assert_eq!(p2.manhattan_distance(p1), d);
    });
}

#[test]
fn test_dir_to() {
    let p = GridPoint::new(3, 3);
    for dir in Dir::iter() {
        assert_eq!(p.dir_to(p.translate(dir, 1)), Some(dir));
    }
    assert_eq!(p.dir_to(p), None);
    assert_eq!(p.dir_to(GridPoint::new(4, 4)), None);
    assert_eq!(p.dir_to(p.translate(Dir::R, 2)), None);
}

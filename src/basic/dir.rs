use std::ops::Neg;

use Dir::*;

// defined in the order in which the autopilot scans them when panicking
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
pub enum Dir {
    U = 0,
    D = 1,
    L = 2,
    R = 3,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub const ALL: [Dir; 4] = [U, D, L, R];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied()
    }

    /// Unit step in this direction, y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, L | R)
    }
}

#[test]
fn test_dir_opposite() {
    for dir in Dir::iter() {
        assert_ne!(-dir, dir);
        assert_eq!(-(-dir), dir);
        let (dx, dy) = dir.delta();
        let (ox, oy) = (-dir).delta();
        assert_eq!((dx + ox, dy + oy), (0, 0));
        assert_eq!(dir.is_horizontal(), (-dir).is_horizontal());
    }
}

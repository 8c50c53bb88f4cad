use crate::basic::GridPoint;
use std::ops::Mul;

/// A continuous position on the board measured in cells,
/// used to place segments between two ticks
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<GridPoint> for Point {
    fn from(GridPoint { x, y }: GridPoint) -> Self {
        Self { x: x as f32, y: y as f32 }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Point {
    /// Linear interpolation, `frac` 0 gives `self`, 1 gives `other`
    #[must_use]
    pub fn lerp(self, other: Self, frac: f32) -> Self {
        self + (other - self) * frac
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

#[test]
fn test_lerp() {
    let a = Point { x: 1., y: 2. };
    let b = Point { x: 3., y: 2. };
    assert_eq!(a.lerp(b, 0.), a);
    assert_eq!(a.lerp(b, 1.), b);
    assert_eq!(a.lerp(b, 0.5), Point { x: 2., y: 2. });
    assert!(((b - a).magnitude() - 2.).abs() < f32::EPSILON);
}

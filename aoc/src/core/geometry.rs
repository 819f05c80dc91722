//! Grid geometry: integer points and compass headings.
//!
//! `+y` is North and `+x` is East.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("bad bearing: {0}")]
    BadBearing(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance from the origin.
    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    pub fn manhattan_to(self, other: Point) -> i64 {
        (self - other).manhattan()
    }

    /// The point `steps` moves away in direction `dir`.
    pub fn moved(self, dir: CardinalDirection, steps: i64) -> Point {
        self + dir.step() * steps
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl MulAssign<i64> for Point {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// Compass heading, stored as a bearing in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North = 0,
    East = 90,
    South = 180,
    West = 270,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub const fn bearing(self) -> i32 {
        self as i32
    }

    /// Normalise `bearing` into `[0, 360)` and map it to a heading.
    pub fn from_bearing(bearing: i32) -> Result<Self, GeometryError> {
        match bearing.rem_euclid(360) {
            0 => Ok(CardinalDirection::North),
            90 => Ok(CardinalDirection::East),
            180 => Ok(CardinalDirection::South),
            270 => Ok(CardinalDirection::West),
            _ => Err(GeometryError::BadBearing(bearing)),
        }
    }

    pub const fn turn_left(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::East,
            CardinalDirection::East => CardinalDirection::North,
        }
    }

    pub const fn turn_right(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::East,
            CardinalDirection::East => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::North,
        }
    }

    /// Unit step for one move in this direction.
    pub const fn step(self) -> Point {
        match self {
            CardinalDirection::North => Point::new(0, 1),
            CardinalDirection::South => Point::new(0, -1),
            CardinalDirection::East => Point::new(1, 0),
            CardinalDirection::West => Point::new(-1, 0),
        }
    }
}

//! Integer grid coordinates and the fixed North/East/South/West ordering
//!
//! The direction order is shared by neighbor enumeration and glue patterns:
//! slot `i` of a pattern faces `Position::neighbors()[i]`.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use thiserror::Error;

/// Cardinal direction, discriminants match glue pattern slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards increasing `y`
    North = 0,
    /// Towards increasing `x`
    East = 1,
    /// Towards decreasing `y`
    South = 2,
    /// Towards decreasing `x`
    West = 3,
}

impl Direction {
    /// All directions in pattern order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction facing back, `(i + 2) mod 4`
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step in this direction
    pub const fn offset(self) -> Position {
        match self {
            Self::North => Position::new(0, 1),
            Self::East => Position::new(1, 0),
            Self::South => Position::new(0, -1),
            Self::West => Position::new(-1, 0),
        }
    }
}

/// Position on the unbounded discrete grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal coordinate, grows eastwards
    pub x: i64,
    /// Vertical coordinate, grows northwards
    pub y: i64,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Adjacent position in one direction
    pub const fn step(self, direction: Direction) -> Self {
        let offset = direction.offset();
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Adjacent position in one direction, `None` past the edge of the `i64` grid
    pub const fn checked_step(self, direction: Direction) -> Option<Self> {
        let offset = direction.offset();
        match (self.x.checked_add(offset.x), self.y.checked_add(offset.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The four adjacent positions in North, East, South, West order
    pub const fn neighbors(self) -> [Self; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::East),
            self.step(Direction::South),
            self.step(Direction::West),
        ]
    }

    /// Persisted map key, `[x,y]`
    pub fn to_key(self) -> String {
        format!("[{},{}]", self.x, self.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rejected position key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid position key '{key}', expected \"[x,y]\"")]
pub struct ParsePositionError {
    key: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses the `[x,y]` key form; whitespace around each integer is allowed
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let error = || ParsePositionError {
            key: key.to_string(),
        };

        let inner = key
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(error)?;
        let (x, y) = inner.split_once(',').ok_or_else(error)?;

        Ok(Self::new(
            x.trim().parse::<i64>().ok().ok_or_else(error)?,
            y.trim().parse::<i64>().ok().ok_or_else(error)?,
        ))
    }
}

//! Glue labels and four-sided glue patterns

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spatial::{Direction, Position};

/// Edge label governing bonding with the opposing edge of a neighbor
///
/// The empty label is the null glue: an open edge that never bonds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glue(String);

impl Glue {
    /// The null glue
    pub const fn null() -> Self {
        Self(String::new())
    }

    /// Glue with the given label, an empty label yields the null glue
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Whether this is the null glue
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Text label, empty for the null glue
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Glue {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Glue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("-")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Glue labels on the North, East, South and West edges, in that order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GluePattern([Glue; 4]);

impl GluePattern {
    /// Pattern from glues in North, East, South, West order
    pub const fn new(glues: [Glue; 4]) -> Self {
        Self(glues)
    }

    /// Pattern from labels, empty strings are null glues
    pub fn from_labels(labels: [&str; 4]) -> Self {
        Self(labels.map(Glue::new))
    }

    /// Glue on one side
    pub const fn glue(&self, direction: Direction) -> &Glue {
        let [north, east, south, west] = &self.0;
        match direction {
            Direction::North => north,
            Direction::East => east,
            Direction::South => south,
            Direction::West => west,
        }
    }

    /// Replace the glue on one side
    pub fn set_glue(&mut self, direction: Direction, glue: Glue) {
        let [north, east, south, west] = &mut self.0;
        let slot = match direction {
            Direction::North => north,
            Direction::East => east,
            Direction::South => south,
            Direction::West => west,
        };
        *slot = glue;
    }

    /// Glues paired with their direction, in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Glue)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }

    /// Number of non-null glues
    pub fn bond_count(&self) -> usize {
        self.0.iter().filter(|glue| !glue.is_null()).count()
    }
}

impl fmt::Display for GluePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [north, east, south, west] = &self.0;
        write!(f, "[{north} {east} {south} {west}]")
    }
}

/// Tile occupying a grid position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedTile {
    /// Occupied position
    pub position: Position,
    /// Glue pattern of the placed tile
    pub glues: GluePattern,
}

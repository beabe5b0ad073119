//! Axis-aligned bounds over grid positions

use crate::spatial::Position;

/// Inclusive bounding box of a set of positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Position,
    /// Maximum coordinates (inclusive)
    pub max: Position,
}

impl BoundingBox {
    /// Smallest box holding every position, `None` when there are none
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        positions.into_iter().fold(None, |bounds, pos| {
            Some(match bounds {
                None => Self { min: pos, max: pos },
                Some(b) => b.including(pos),
            })
        })
    }

    /// Grow the box to include a position
    #[must_use]
    pub fn including(self, pos: Position) -> Self {
        Self {
            min: Position::new(self.min.x.min(pos.x), self.min.y.min(pos.y)),
            max: Position::new(self.max.x.max(pos.x), self.max.y.max(pos.y)),
        }
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    /// Number of columns covered, `None` when the box spans the whole `i64` range
    pub const fn width(&self) -> Option<u64> {
        self.max.x.abs_diff(self.min.x).checked_add(1)
    }

    /// Number of rows covered, `None` when the box spans the whole `i64` range
    pub const fn height(&self) -> Option<u64> {
        self.max.y.abs_diff(self.min.y).checked_add(1)
    }

    /// Raster cell `(row, col)` for a position, rows run from north to south
    ///
    /// Returns `None` outside the box.
    pub const fn cell(&self, pos: Position) -> Option<(usize, usize)> {
        if !self.contains(pos) {
            return None;
        }
        Some((
            self.max.y.abs_diff(pos.y) as usize,
            pos.x.abs_diff(self.min.x) as usize,
        ))
    }
}

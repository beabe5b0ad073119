//! Named tile types and glue constraint matching
//!
//! Tile types are kept in a name-keyed ordered map. Iteration, matching and
//! reverse lookup all follow name order, so results are reproducible across
//! runs and after a reload.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::Direction;
use crate::tiles::GluePattern;

/// Matching tile type borrowed from a tile set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMatch<'a> {
    /// Tile type name
    pub name: &'a str,
    /// Tile type glues
    pub glues: &'a GluePattern,
}

/// Collection of named tile types
///
/// Several names may share one glue pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileSet {
    tile_types: BTreeMap<String, GluePattern>,
}

impl TileSet {
    /// Create an empty tile set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile type
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name is already taken
    pub fn insert(&mut self, name: impl Into<String>, glues: GluePattern) -> Result<()> {
        match self.tile_types.entry(name.into()) {
            Entry::Occupied(entry) => Err(invalid_parameter(
                "tile name",
                entry.key(),
                &"a tile type with this name already exists",
            )),
            Entry::Vacant(entry) => {
                entry.insert(glues);
                Ok(())
            }
        }
    }

    /// Glues of a named tile type
    pub fn get(&self, name: &str) -> Option<&GluePattern> {
        self.tile_types.get(name)
    }

    /// Number of tile types
    pub fn len(&self) -> usize {
        self.tile_types.len()
    }

    /// Whether the set has no tile type
    pub fn is_empty(&self) -> bool {
        self.tile_types.is_empty()
    }

    /// Tile types in name order
    pub fn iter(&self) -> impl Iterator<Item = TileMatch<'_>> {
        self.tile_types
            .iter()
            .map(|(name, glues)| TileMatch { name, glues })
    }

    /// Tile types satisfying the neighbor glue constraints
    ///
    /// Directions are scanned North, East, South, West. A null constraint is
    /// skipped. The first non-null constraint that differs from the tile's
    /// glue ends the scan, so later directions never count even when they
    /// agree. A tile qualifies when the directions matched before that point
    /// reach `threshold`.
    pub fn match_tiles(&self, constraints: &GluePattern, threshold: usize) -> Vec<TileMatch<'_>> {
        self.iter()
            .filter(|tile| scan_matches(constraints, tile.glues) >= threshold)
            .collect()
    }

    /// Name of the first tile type, in name order, carrying this pattern
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no tile type has exactly these glues
    pub fn tile_name(&self, glues: &GluePattern) -> Result<&str> {
        self.tile_types
            .iter()
            .find(|(_, candidate)| *candidate == glues)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| AlgorithmError::NotFound {
                pattern: glues.clone(),
            })
    }
}

impl FromIterator<(String, GluePattern)> for TileSet {
    /// Later entries for a repeated name replace earlier ones
    fn from_iter<I: IntoIterator<Item = (String, GluePattern)>>(iter: I) -> Self {
        Self {
            tile_types: iter.into_iter().collect(),
        }
    }
}

/// Count of constraint directions matched before the first mismatch
fn scan_matches(constraints: &GluePattern, glues: &GluePattern) -> usize {
    let mut count = 0;
    for direction in Direction::ALL {
        let constraint = constraints.glue(direction);
        if constraint.is_null() {
            continue;
        }
        if constraint != glues.glue(direction) {
            break;
        }
        count += 1;
    }
    count
}

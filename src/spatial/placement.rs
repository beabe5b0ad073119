//! Sparse map from grid positions to placed glue patterns
//!
//! Positions are persisted as `"[x,y]"` string keys so the JSON object form
//! reloads to the exact same associations.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::Position;
use crate::tiles::{GluePattern, PlacedTile};

/// Append-only placement of glue patterns on the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementMap {
    tiles: HashMap<Position, GluePattern>,
}

impl PlacementMap {
    /// Create an empty placement map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tile at an empty position
    ///
    /// # Errors
    ///
    /// Returns `PositionOccupied` if the position already holds a tile
    pub fn insert(&mut self, position: Position, glues: GluePattern) -> Result<()> {
        match self.tiles.entry(position) {
            Entry::Occupied(_) => Err(AlgorithmError::PositionOccupied { position }),
            Entry::Vacant(slot) => {
                slot.insert(glues);
                Ok(())
            }
        }
    }

    /// Glue pattern at a position
    pub fn get(&self, position: Position) -> Option<&GluePattern> {
        self.tiles.get(&position)
    }

    /// Whether a position holds a tile
    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been placed
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Placed tiles in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &GluePattern)> {
        self.tiles.iter().map(|(&pos, glues)| (pos, glues))
    }

    /// Placed tiles sorted by position
    pub fn sorted(&self) -> Vec<(Position, &GluePattern)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(pos, _)| pos);
        entries
    }
}

impl FromIterator<(Position, GluePattern)> for PlacementMap {
    /// Later entries for a repeated position replace earlier ones
    fn from_iter<I: IntoIterator<Item = (Position, GluePattern)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<PlacedTile> for PlacementMap {
    fn from_iter<I: IntoIterator<Item = PlacedTile>>(iter: I) -> Self {
        iter.into_iter()
            .map(|tile| (tile.position, tile.glues))
            .collect()
    }
}

impl IntoIterator for PlacementMap {
    type Item = (Position, GluePattern);
    type IntoIter = std::collections::hash_map::IntoIter<Position, GluePattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}

impl Serialize for PlacementMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.sorted();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (pos, glues) in entries {
            map.serialize_entry(&pos.to_key(), glues)?;
        }
        map.end()
    }
}

struct PlacementMapVisitor;

impl<'de> Visitor<'de> for PlacementMapVisitor {
    type Value = PlacementMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from \"[x,y]\" position keys to glue patterns")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<PlacementMap, A::Error> {
        let mut tiles = HashMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, glues)) = access.next_entry::<String, GluePattern>()? {
            let position: Position = key.parse().map_err(de::Error::custom)?;
            if tiles.insert(position, glues).is_some() {
                return Err(de::Error::custom(format!(
                    "position {position} appears more than once"
                )));
            }
        }
        Ok(PlacementMap { tiles })
    }
}

impl<'de> Deserialize<'de> for PlacementMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(PlacementMapVisitor)
    }
}

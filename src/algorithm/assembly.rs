//! Tile assembly state: placements, frontier and pending change log
//!
//! Every tile, seed or grown, enters through [`TileAssembly::place`], which
//! keeps the frontier consistent with the placement map: a position is in the
//! frontier exactly when it is empty, adjacent to a tile, and its neighbors
//! expose at least `threshold` non-null glues towards it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::{Direction, PlacementMap, Position};
use crate::tiles::{GluePattern, PlacedTile, TileSet};

/// Largest usable threshold, one bond per side
pub const MAX_THRESHOLD: usize = 4;

/// Abstract tile assembly grown from a seed
///
/// Equality compares the tile set, the placements and the threshold only;
/// the frontier and the change log are derived state.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "AssemblyRecord")]
pub struct TileAssembly {
    tile_set: TileSet,
    tiles: PlacementMap,
    threshold: usize,
    frontier: HashSet<Position>,
    newly_added: Vec<PlacedTile>,
}

impl TileAssembly {
    /// Create an assembly and place every seed tile
    ///
    /// Seeds go through the same placement path as grown tiles, in position
    /// order, so they all appear in the change log.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `threshold` exceeds [`MAX_THRESHOLD`]
    pub fn new(tile_set: TileSet, seed: PlacementMap, threshold: usize) -> Result<Self> {
        if threshold > MAX_THRESHOLD {
            return Err(invalid_parameter(
                "threshold",
                &threshold,
                &format!("must be between 0 and {MAX_THRESHOLD}"),
            ));
        }

        let mut assembly = Self {
            tile_set,
            tiles: PlacementMap::new(),
            threshold,
            frontier: HashSet::new(),
            newly_added: Vec::with_capacity(seed.len()),
        };

        let mut seed_tiles: Vec<_> = seed.into_iter().collect();
        seed_tiles.sort_unstable_by_key(|&(pos, _)| pos);
        for (position, glues) in seed_tiles {
            assembly.place(position, glues)?;
        }

        Ok(assembly)
    }

    /// Place a tile regardless of glue matching
    ///
    /// Used for seeding and for applying grown tiles. The placement is logged
    /// and the neighbors are re-examined for frontier membership. Positions
    /// on the edge of the `i64` grid have fewer than four neighbors.
    ///
    /// # Errors
    ///
    /// Returns `PositionOccupied` if the position already holds a tile; the
    /// assembly is left unchanged.
    pub fn place(&mut self, position: Position, glues: GluePattern) -> Result<()> {
        self.tiles.insert(position, glues.clone())?;
        self.frontier.remove(&position);
        self.newly_added.push(PlacedTile { position, glues });

        for neighbor in Direction::ALL.map(|direction| position.checked_step(direction)) {
            let Some(neighbor) = neighbor else {
                continue;
            };
            if !self.tiles.contains(neighbor) && self.meets_threshold(neighbor) {
                self.frontier.insert(neighbor);
            }
        }
        Ok(())
    }

    /// Glues that occupied neighbors expose towards a position
    ///
    /// Slot `d` holds the neighbor in direction `d`'s glue on its opposite
    /// side, or the null glue when that neighbor is empty or lies past the
    /// edge of the grid.
    pub fn neighboring_glues(&self, position: Position) -> GluePattern {
        let mut constraints = GluePattern::default();
        for direction in Direction::ALL {
            let neighbor = position
                .checked_step(direction)
                .and_then(|step| self.tiles.get(step));
            if let Some(neighbor) = neighbor {
                constraints.set_glue(direction, neighbor.glue(direction.opposite()).clone());
            }
        }
        constraints
    }

    fn meets_threshold(&self, position: Position) -> bool {
        self.neighboring_glues(position).bond_count() >= self.threshold
    }

    /// Number of placed tiles
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Minimum number of bonds a position needs before it can grow
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Tile types available for growth
    pub const fn tile_set(&self) -> &TileSet {
        &self.tile_set
    }

    /// Placed tiles
    pub const fn tiles(&self) -> &PlacementMap {
        &self.tiles
    }

    /// Empty positions currently eligible for growth
    pub const fn frontier(&self) -> &HashSet<Position> {
        &self.frontier
    }

    /// Tiles placed since the last flush, in placement order
    pub fn newly_added_tiles(&self) -> &[PlacedTile] {
        &self.newly_added
    }

    /// Forget the logged placements
    ///
    /// Consumers call this once everything returned by
    /// [`newly_added_tiles`](Self::newly_added_tiles) has been handled.
    pub fn flush_newly_added_tiles(&mut self) {
        self.newly_added.clear();
    }
}

impl PartialEq for TileAssembly {
    fn eq(&self, other: &Self) -> bool {
        self.threshold == other.threshold
            && self.tile_set == other.tile_set
            && self.tiles == other.tiles
    }
}

impl Eq for TileAssembly {}

/// Persisted form of an assembly, frontier and change log are rebuilt on load
#[derive(Deserialize)]
struct AssemblyRecord {
    tile_set: TileSet,
    tile_map: PlacementMap,
    threshold: usize,
}

#[derive(Serialize)]
struct AssemblyRecordRef<'a> {
    tile_set: &'a TileSet,
    tile_map: &'a PlacementMap,
    threshold: usize,
}

impl TryFrom<AssemblyRecord> for TileAssembly {
    type Error = AlgorithmError;

    fn try_from(record: AssemblyRecord) -> Result<Self> {
        Self::new(record.tile_set, record.tile_map, record.threshold)
    }
}

impl Serialize for TileAssembly {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AssemblyRecordRef {
            tile_set: &self.tile_set,
            tile_map: &self.tiles,
            threshold: self.threshold,
        }
        .serialize(serializer)
    }
}

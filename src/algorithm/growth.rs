//! Synchronous growth rounds

use crate::algorithm::assembly::TileAssembly;
use crate::io::error::{AlgorithmError, Result};
use crate::tiles::PlacedTile;

impl TileAssembly {
    /// Run one synchronous growth round
    ///
    /// Every frontier position is matched against the assembly as it stood
    /// before the round; tiles placed during the round are not visible to
    /// other positions of the same round. When several tile types fit one
    /// position, directed growth fails, undirected growth places the first
    /// one in tile set name order.
    ///
    /// Returns whether any tile was placed. A converged assembly returns
    /// `false` and is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `NonDeterminism` in directed mode when more than one tile type
    /// fits a frontier position. No tile of the round is placed in that case.
    pub fn grow_sync(&mut self, directed: bool) -> Result<bool> {
        let staged = self.stage_round(directed)?;
        for tile in &staged {
            self.place(tile.position, tile.glues.clone())?;
        }
        Ok(!staged.is_empty())
    }

    /// Tiles to place this round, computed without mutating the assembly
    fn stage_round(&self, directed: bool) -> Result<Vec<PlacedTile>> {
        // Sorted so the change log order does not depend on hashing
        let mut candidates: Vec<_> = self.frontier().iter().copied().collect();
        candidates.sort_unstable();

        let mut staged = Vec::with_capacity(candidates.len());
        for position in candidates {
            let constraints = self.neighboring_glues(position);
            let matches = self.tile_set().match_tiles(&constraints, self.threshold());

            if directed && matches.len() > 1 {
                return Err(AlgorithmError::NonDeterminism {
                    position,
                    candidates: matches.iter().map(|m| m.name.to_string()).collect(),
                });
            }

            if let Some(chosen) = matches.first() {
                staged.push(PlacedTile {
                    position,
                    glues: chosen.glues.clone(),
                });
            }
        }
        Ok(staged)
    }
}

//! Host loop repeating growth rounds
//!
//! The assembly never loops by itself. A tile set that keeps matching grows
//! forever, so hosts that cannot rule that out set a round limit here.

use crate::algorithm::assembly::TileAssembly;
use crate::io::error::Result;

/// Outcome of one round that placed tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    /// Tiles placed by this round
    pub added: usize,
    /// Assembly size after the round
    pub total: usize,
}

/// Outcome of a growth run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthSummary {
    /// Rounds that placed at least one tile
    pub rounds: usize,
    /// Tiles placed across all rounds
    pub tiles_added: usize,
    /// Whether the last round found nothing to place
    pub converged: bool,
}

/// Repeats growth rounds until convergence, an error, or a round limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthDriver {
    directed: bool,
    max_rounds: Option<usize>,
}

impl GrowthDriver {
    /// Driver without a round limit
    pub const fn new(directed: bool) -> Self {
        Self {
            directed,
            max_rounds: None,
        }
    }

    /// Stop after at most `max_rounds` growing rounds
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Whether rounds fail on ambiguous matches
    pub const fn directed(&self) -> bool {
        self.directed
    }

    /// Grow until no tile fits anymore
    ///
    /// `on_round` runs after every round that placed tiles, typically to
    /// drain the assembly's change log.
    ///
    /// # Errors
    ///
    /// Propagates the first growth error; tiles of earlier rounds stay placed
    pub fn run<F>(&self, assembly: &mut TileAssembly, mut on_round: F) -> Result<GrowthSummary>
    where
        F: FnMut(&RoundReport, &mut TileAssembly),
    {
        let initial_size = assembly.size();
        let mut rounds = 0;

        let converged = loop {
            if self.max_rounds.is_some_and(|max| rounds >= max) {
                break false;
            }

            let before = assembly.size();
            if !assembly.grow_sync(self.directed)? {
                break true;
            }
            rounds += 1;

            let report = RoundReport {
                round: rounds,
                added: assembly.size() - before,
                total: assembly.size(),
            };
            on_round(&report, assembly);
        };

        Ok(GrowthSummary {
            rounds,
            tiles_added: assembly.size() - initial_size,
            converged,
        })
    }

    /// Grow until no tile fits anymore, without observing rounds
    ///
    /// # Errors
    ///
    /// Propagates the first growth error
    pub fn run_to_convergence(&self, assembly: &mut TileAssembly) -> Result<GrowthSummary> {
        self.run(assembly, |_, _| {})
    }
}

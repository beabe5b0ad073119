//! Command-line interface for growing, saving and exporting assemblies

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::assembly::TileAssembly;
use crate::algorithm::driver::{GrowthDriver, GrowthSummary};
use crate::io::configuration::{
    DEFAULT_CRT_P, DEFAULT_CRT_Q, DEFAULT_SEED_SIZE, DEFAULT_THRESHOLD, DEFAULT_TILE_PIXELS,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_assembly_png;
use crate::io::persistence::{load_assembly, save_assembly};
use crate::io::progress::GrowthProgress;
use crate::io::seed::l_shaped_boundary;
use crate::io::visualization::GrowthCapture;
use crate::tiles::crt::crt_tile_set;

#[derive(Parser, Debug)]
#[command(name = "tamtam")]
#[command(author, version, about = "Grow abstract tile self-assemblies")]
/// Command-line arguments for the assembly tool
pub struct Cli {
    /// Saved assembly to grow instead of the CRT demonstration
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// First CRT tile set parameter
    #[arg(long, default_value_t = DEFAULT_CRT_P)]
    pub crt_p: u64,

    /// Second CRT tile set parameter, coprime with the first
    #[arg(long, default_value_t = DEFAULT_CRT_Q)]
    pub crt_q: u64,

    /// Edge length of the L-shaped boundary seed
    #[arg(short, long, default_value_t = DEFAULT_SEED_SIZE)]
    pub size: usize,

    /// Bonds required before a position can grow (0 to 4)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// Place the first matching tile instead of failing on ambiguous positions
    #[arg(short, long)]
    pub undirected: bool,

    /// Stop after this many growing rounds
    #[arg(short, long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Write the grown assembly as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the grown assembly as a PNG image
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Write the growth as an animated GIF, one frame per round
    #[arg(long, value_name = "FILE")]
    pub gif: Option<PathBuf>,

    /// Side of one tile in exported pixels
    #[arg(long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Growth driver configured from the arguments
    pub const fn driver(&self) -> GrowthDriver {
        let driver = GrowthDriver::new(!self.undirected);
        match self.max_rounds {
            Some(max) => driver.with_max_rounds(max),
            None => driver,
        }
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    /// The grown assembly
    pub assembly: TileAssembly,
    /// Growth statistics
    pub summary: GrowthSummary,
}

/// Builds or loads an assembly, grows it and writes the requested outputs
pub struct AssemblyRunner {
    cli: Cli,
}

impl AssemblyRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Starting assembly: the saved one, or the CRT demonstration
    ///
    /// # Errors
    ///
    /// Returns an error if the saved assembly cannot be loaded or the
    /// demonstration parameters are invalid
    pub fn initial_assembly(&self) -> Result<TileAssembly> {
        if let Some(path) = &self.cli.input {
            return load_assembly(path);
        }
        let tile_set = crt_tile_set(self.cli.crt_p, self.cli.crt_q)?;
        let seed = l_shaped_boundary(self.cli.size)?;
        TileAssembly::new(tile_set, seed, self.cli.threshold)
    }

    /// Grow to convergence (or the round limit) and write outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The starting assembly cannot be built
    /// - Directed growth meets an ambiguous position
    /// - Any requested output cannot be written
    pub fn run(&self) -> Result<RunOutcome> {
        let mut assembly = self.initial_assembly()?;

        let progress = if self.cli.should_show_progress() {
            GrowthProgress::new(assembly.size())
        } else {
            GrowthProgress::hidden()
        };

        let mut capture = self.cli.gif.as_ref().map(|_| GrowthCapture::new());
        if let Some(capture) = capture.as_mut() {
            capture.drain(&mut assembly);
        } else {
            assembly.flush_newly_added_tiles();
        }

        let summary = self.cli.driver().run(&mut assembly, |report, grown| {
            progress.update_round(report);
            match capture.as_mut() {
                Some(capture) => capture.drain(grown),
                None => grown.flush_newly_added_tiles(),
            }
        })?;
        progress.finish(&summary);

        if let Some(path) = &self.cli.output {
            save_assembly(&assembly, path)?;
        }
        if let Some(path) = &self.cli.png {
            export_assembly_png(&assembly, path, self.cli.scale)?;
        }
        if let (Some(path), Some(capture)) = (&self.cli.gif, &capture) {
            capture.export_gif(assembly.tile_set(), path, self.cli.scale, GIF_FRAME_DELAY_MS)?;
        }

        Ok(RunOutcome { assembly, summary })
    }
}

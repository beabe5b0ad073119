//! CLI entry point for growing tile self-assemblies

use clap::Parser;
use tamtam::io::cli::{AssemblyRunner, Cli};

// Allow print for the final run summary
#[allow(clippy::print_stderr)]
fn main() -> tamtam::Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let outcome = AssemblyRunner::new(cli).run()?;

    if !quiet {
        eprintln!(
            "{} tiles after {} rounds ({})",
            outcome.assembly.size(),
            outcome.summary.rounds,
            if outcome.summary.converged {
                "converged"
            } else {
                "round limit reached"
            }
        );
    }
    Ok(())
}

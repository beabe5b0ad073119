//! Abstract tile self-assembly simulator
//!
//! Square tiles carry glue labels on their four sides. Starting from a seed,
//! a tile type is added at an empty grid position once enough of the
//! neighbors' facing glues match it. Growth proceeds in synchronous rounds,
//! and directed assembly requires a unique matching tile type per position.

#![forbid(unsafe_code)]

/// Assembly engine, growth rounds and the host growth loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid positions, bounds and the placement map
pub mod spatial;
/// Glues, tile types and tile sets
pub mod tiles;

pub use algorithm::assembly::TileAssembly;
pub use io::error::{AlgorithmError, Result};

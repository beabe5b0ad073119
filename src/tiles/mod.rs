//! Tile types, glue patterns and tile sets

/// Chinese-remainder demonstration tile set generator
pub mod crt;
/// Glue labels and four-sided glue patterns
pub mod glue;
/// Named tile types and constraint matching
pub mod tile_set;

pub use glue::{Glue, GluePattern, PlacedTile};
pub use tile_set::{TileMatch, TileSet};

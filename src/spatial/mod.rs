//! Spatial data structures for the unbounded tile grid
//!
//! This module contains spatial-related functionality including:
//! - Grid positions and the fixed neighbor ordering
//! - Bounding boxes for raster export
//! - The sparse placement map

/// Bounding boxes over grid positions
pub mod bounds;
/// Sparse append-only placement map and its persisted form
pub mod placement;
/// Grid positions and cardinal directions
pub mod position;

pub use bounds::BoundingBox;
pub use placement::PlacementMap;
pub use position::{Direction, Position};

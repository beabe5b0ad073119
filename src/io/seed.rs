//! Seed configurations for demonstration assemblies

use crate::io::configuration::{CORNER_GLUE, SOUTH_EDGE_GLUE, WEST_EDGE_GLUE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Direction, PlacementMap, Position};
use crate::tiles::{Glue, GluePattern};

/// Pattern with a single non-null glue on one side
pub fn single_glue(direction: Direction, label: &str) -> GluePattern {
    let mut glues = GluePattern::default();
    glues.set_glue(direction, Glue::new(label));
    glues
}

/// L-shaped boundary enclosing the `size x size` square at the origin
///
/// `size` tiles along the west edge (`x = -1`, `0 <= y < size`) expose
/// [`WEST_EDGE_GLUE`] eastwards. Along the south edge (`y = -1`) the tile
/// below the origin exposes [`CORNER_GLUE`] northwards and the `size - 1`
/// tiles after it expose [`SOUTH_EDGE_GLUE`]. The seed has `2 * size` tiles.
///
/// # Errors
///
/// Returns a configuration error if `size` is zero or does not fit a grid
/// coordinate
pub fn l_shaped_boundary(size: usize) -> Result<PlacementMap> {
    let edge = i64::try_from(size)
        .ok()
        .filter(|&edge| edge > 0)
        .ok_or_else(|| invalid_parameter("size", &size, &"must be a positive grid length"))?;

    let west = (0..edge).map(|y| {
        (
            Position::new(-1, y),
            single_glue(Direction::East, WEST_EDGE_GLUE),
        )
    });
    let corner = std::iter::once((
        Position::new(0, -1),
        single_glue(Direction::North, CORNER_GLUE),
    ));
    let south = (1..edge).map(|x| {
        (
            Position::new(x, -1),
            single_glue(Direction::North, SOUTH_EDGE_GLUE),
        )
    });

    Ok(west.chain(corner).chain(south).collect())
}

//! PNG export of placed tiles, cropped to the assembly bounds
//!
//! One tile becomes a `scale x scale` block. North is up.

use std::collections::HashMap;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::algorithm::assembly::TileAssembly;
use crate::io::configuration::{MAX_EXPORT_PIXELS, MAX_TILE_PIXELS, SEED_COLOR};
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::spatial::{BoundingBox, Position};
use crate::tiles::{GluePattern, TileSet};

/// Transparent background of exported PNGs
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Tile colors keyed by tile type
///
/// Tile types get evenly spread hues in name order. Patterns that are not a
/// tile type of the set, such as hand-made seed tiles, use [`SEED_COLOR`].
pub struct TilePalette<'a> {
    tile_set: &'a TileSet,
    colors: HashMap<&'a str, [u8; 4]>,
}

impl<'a> TilePalette<'a> {
    /// Assign a color to every tile type of the set
    pub fn new(tile_set: &'a TileSet) -> Self {
        let count = tile_set.len().max(1) as f64;
        let colors = tile_set
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let hue = 360.0 * index as f64 / count;
                (tile.name, hsv_to_rgba(hue, 0.65, 0.9))
            })
            .collect();
        Self { tile_set, colors }
    }

    /// Color of a placed tile
    pub fn color(&self, glues: &GluePattern) -> [u8; 4] {
        self.tile_set
            .tile_name(glues)
            .ok()
            .and_then(|name| self.colors.get(name))
            .copied()
            .unwrap_or(SEED_COLOR)
    }
}

// Hue in degrees, saturation and value in [0, 1]
fn hsv_to_rgba(hue: f64, saturation: f64, value: f64) -> [u8; 4] {
    let chroma = value * saturation;
    let sector = (hue / 60.0).rem_euclid(6.0);
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b), 255]
}

/// Raster `(rows, cols)` of `bounds`, checked before anything is allocated
///
/// # Errors
///
/// Returns a configuration error if `scale` is out of range, or if the
/// scaled image would exceed `u32` sides or [`MAX_EXPORT_PIXELS`]
pub fn raster_shape(bounds: &BoundingBox, scale: u32) -> Result<(usize, usize)> {
    check_scale(scale)?;

    let too_large = |axis: &'static str| {
        invalid_parameter(
            axis,
            &format!("{} to {}", bounds.min, bounds.max),
            &"assembly too large to export",
        )
    };
    let scaled = |cells: Option<u64>, axis: &'static str| {
        cells
            .filter(|&count| {
                count
                    .checked_mul(u64::from(scale))
                    .is_some_and(|pixels| pixels <= u64::from(u32::MAX))
            })
            .ok_or_else(|| too_large(axis))
    };
    let cols = scaled(bounds.width(), "width")?;
    let rows = scaled(bounds.height(), "height")?;

    // Both sides fit u32 once scaled, so the product fits u64
    let pixels = rows * cols * u64::from(scale) * u64::from(scale);
    if pixels > MAX_EXPORT_PIXELS {
        return Err(invalid_parameter(
            "pixels",
            &pixels,
            &format!("assembly too large to export, limit is {MAX_EXPORT_PIXELS}"),
        ));
    }

    Ok((rows as usize, cols as usize))
}

fn check_scale(scale: u32) -> Result<()> {
    if scale == 0 || scale > MAX_TILE_PIXELS {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_TILE_PIXELS}"),
        ));
    }
    Ok(())
}

/// One color per grid cell of `bounds`, row 0 is the northern edge
///
/// Tiles outside the bounds are ignored.
///
/// # Errors
///
/// Returns a configuration error if the raster would be too large to export
pub fn rasterize<'t>(
    tiles: impl IntoIterator<Item = (Position, &'t GluePattern)>,
    bounds: &BoundingBox,
    palette: &TilePalette<'_>,
    background: [u8; 4],
) -> Result<Array2<[u8; 4]>> {
    let mut cells = Array2::from_elem(raster_shape(bounds, 1)?, background);
    paint(&mut cells, tiles, bounds, palette);
    Ok(cells)
}

/// Paint tiles onto an existing raster of `bounds`
pub fn paint<'t>(
    cells: &mut Array2<[u8; 4]>,
    tiles: impl IntoIterator<Item = (Position, &'t GluePattern)>,
    bounds: &BoundingBox,
    palette: &TilePalette<'_>,
) {
    for (position, glues) in tiles {
        let Some(cell) = bounds.cell(position) else {
            continue;
        };
        if let Some(slot) = cells.get_mut(cell) {
            *slot = palette.color(glues);
        }
    }
}

/// Scale a cell raster up to an image
///
/// # Errors
///
/// Returns a configuration error if `scale` is zero or above
/// [`MAX_TILE_PIXELS`], or if the image would exceed `u32` dimensions
pub fn to_image(cells: &Array2<[u8; 4]>, scale: u32) -> Result<RgbaImage> {
    check_scale(scale)?;

    let (rows, cols) = cells.dim();
    let pixels = |count: usize, axis: &'static str| {
        u32::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(scale))
            .ok_or_else(|| invalid_parameter(axis, &count, &"assembly too large to export"))
    };
    let width = pixels(cols, "width")?;
    let height = pixels(rows, "height")?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let cell = ((y / scale) as usize, (x / scale) as usize);
        Rgba(cells.get(cell).copied().unwrap_or(TRANSPARENT))
    }))
}

/// Export the placed tiles as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The assembly holds no tile
/// - `scale` is out of range or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_assembly_png(assembly: &TileAssembly, output_path: &Path, scale: u32) -> Result<()> {
    let bounds = BoundingBox::from_positions(assembly.tiles().iter().map(|(pos, _)| pos))
        .ok_or(AlgorithmError::EmptyAssembly)?;
    raster_shape(&bounds, scale)?;
    let palette = TilePalette::new(assembly.tile_set());
    let cells = rasterize(assembly.tiles().iter(), &bounds, &palette, TRANSPARENT)?;
    let img = to_image(&cells, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

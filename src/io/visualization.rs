//! Growth capture and GIF generation
//!
//! The capture is a consumer of the assembly change log: each drained batch
//! becomes one animation frame.

use std::path::Path;

use image::{Delay, Frame};

use crate::algorithm::assembly::TileAssembly;
use crate::io::configuration::{EMPTY_COLOR, GIF_FINAL_FRAME_FACTOR};
use crate::io::error::{AlgorithmError, Result, file_system_error};
use crate::io::image::{TilePalette, paint, raster_shape, to_image};
use crate::spatial::BoundingBox;
use crate::tiles::{PlacedTile, TileSet};

/// Records batches of placed tiles for animation
#[derive(Debug, Default)]
pub struct GrowthCapture {
    batches: Vec<Vec<PlacedTile>>,
}

impl GrowthCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending placement of the assembly as one batch
    ///
    /// The change log is flushed once the batch is stored. Nothing is
    /// recorded when the log is empty.
    pub fn drain(&mut self, assembly: &mut TileAssembly) {
        let pending = assembly.newly_added_tiles();
        if !pending.is_empty() {
            self.batches.push(pending.to_vec());
        }
        assembly.flush_newly_added_tiles();
    }

    /// Recorded batches, oldest first
    pub fn batches(&self) -> &[Vec<PlacedTile>] {
        &self.batches
    }

    /// Total number of recorded placements
    pub fn placement_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// Export the batches as an animated GIF, one cumulative frame per batch
    ///
    /// The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placement was captured
    /// - `scale` is out of range or the frames would be too large
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        tile_set: &TileSet,
        output_path: &Path,
        scale: u32,
        frame_delay_ms: u32,
    ) -> Result<()> {
        let bounds = BoundingBox::from_positions(
            self.batches
                .iter()
                .flatten()
                .map(|tile| tile.position),
        )
        .ok_or(AlgorithmError::EmptyAssembly)?;

        let frames = self.render_frames(tile_set, &bounds, scale, frame_delay_ms)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn render_frames(
        &self,
        tile_set: &TileSet,
        bounds: &BoundingBox,
        scale: u32,
        frame_delay_ms: u32,
    ) -> Result<Vec<Frame>> {
        let palette = TilePalette::new(tile_set);
        let mut cells = ndarray::Array2::from_elem(raster_shape(bounds, scale)?, EMPTY_COLOR);
        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);

        let mut frames = Vec::with_capacity(self.batches.len() + 1);
        for batch in &self.batches {
            paint(
                &mut cells,
                batch.iter().map(|tile| (tile.position, &tile.glues)),
                bounds,
                &palette,
            );
            frames.push(Frame::from_parts(to_image(&cells, scale)?, 0, 0, delay));
        }

        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            let hold = frame_delay_ms.saturating_mul(GIF_FINAL_FRAME_FACTOR);
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(hold, 1),
            ));
        }

        Ok(frames)
    }
}

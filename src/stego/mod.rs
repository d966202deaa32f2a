//! LSB steganography over a bounded region of each video frame.
//!
//! One bit of payload goes into bit 0 of each 8-bit sample inside the
//! region, visited in row, then column, then channel order. Embedder
//! and extractor share a single continuous cursor across the whole
//! frame sequence; both sides must replay the identical traversal or
//! every bit after the first mismatch is wrong.

pub mod embed;
pub mod extract;

pub use embed::{embed, EmbedStats};
pub use extract::FrameExtractor;

use crate::video::CHANNELS;
use crate::REGION_SIZE;

/// The region of each frame used for embedding.
///
/// Defaults reproduce the wire format: the top-left 100x100 pixels
/// (clamped to the frame) with channels visited in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionConfig {
    /// Upper bound on rows used per frame.
    pub max_rows: usize,
    /// Upper bound on columns used per frame.
    pub max_cols: usize,
    /// Order in which the three channels of a pixel are visited.
    pub channel_order: [usize; CHANNELS],
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            max_rows: REGION_SIZE,
            max_cols: REGION_SIZE,
            channel_order: [0, 1, 2],
        }
    }
}

impl RegionConfig {
    /// Rows actually used for a frame of the given height.
    pub fn bounded_rows(&self, frame_height: u32) -> usize {
        self.max_rows.min(frame_height as usize)
    }

    /// Columns actually used for a frame of the given width.
    pub fn bounded_cols(&self, frame_width: u32) -> usize {
        self.max_cols.min(frame_width as usize)
    }

    /// Number of region cells (one bit each) in a frame of the given size.
    pub fn cells_per_frame(&self, frame_width: u32, frame_height: u32) -> usize {
        self.bounded_rows(frame_height) * self.bounded_cols(frame_width) * CHANNELS
    }

    /// Total bit capacity of `frame_count` frames of the given size.
    pub fn capacity_bits(&self, frame_width: u32, frame_height: u32, frame_count: usize) -> usize {
        self.cells_per_frame(frame_width, frame_height) * frame_count
    }

    /// Maps a cell index within one frame to its `(row, col, channel)`
    /// position, in row, then column, then channel order.
    ///
    /// This is the traversal order of the wire format; embedder and
    /// extractor both go through here.
    pub fn cell(&self, frame_width: u32, frame_height: u32, index: usize) -> (usize, usize, usize) {
        debug_assert!(index < self.cells_per_frame(frame_width, frame_height));
        let cols = self.bounded_cols(frame_width);
        let row = index / (cols * CHANNELS);
        let col = (index / CHANNELS) % cols;
        let channel = self.channel_order[index % CHANNELS];
        (row, col, channel)
    }
}

//! Embeds a framed bit stream into the LSBs of a frame sequence.

use crate::framing::BitStream;
use crate::video::{VideoError, VideoSink, VideoSource};

use super::RegionConfig;

/// What the embedder did with a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedStats {
    /// Bits actually written; less than the stream length means the
    /// frames ran out first.
    pub bits_written: usize,
    /// Frames forwarded to the sink (always equals the source count).
    pub frames_processed: usize,
}

/// Writes `bits` into the region LSBs of successive frames.
///
/// One continuous cursor advances over the region cells of each frame
/// in row, then column, then channel order. Once the stream is
/// exhausted, remaining cells and frames pass through untouched. Every
/// frame is forwarded to the sink in its original position, so frame
/// count and non-region samples are preserved.
///
/// If the frames run out before the stream does, the remaining bits
/// are dropped and the shortfall shows in [`EmbedStats::bits_written`];
/// the caller decides whether that is an error.
pub fn embed<S, K>(
    source: &mut S,
    sink: &mut K,
    bits: &BitStream,
    region: &RegionConfig,
) -> Result<EmbedStats, VideoError>
where
    S: VideoSource,
    K: VideoSink,
{
    let total_bits = bits.len_bits();
    let mut written = 0;
    let mut frames = 0;

    while let Some(mut frame) = source.read_frame()? {
        if written < total_bits {
            let cells = region.cells_per_frame(frame.width(), frame.height());
            for index in 0..cells {
                if written >= total_bits {
                    break;
                }
                let (row, col, channel) = region.cell(frame.width(), frame.height(), index);
                let sample = frame.sample(row, col, channel);
                // Clear bit 0, OR in the payload bit
                frame.set_sample(row, col, channel, (sample & 0xFE) | bits.bit(written));
                written += 1;
            }
        }

        sink.write_frame(frame)?;
        frames += 1;
    }

    Ok(EmbedStats {
        bits_written: written,
        frames_processed: frames,
    })
}

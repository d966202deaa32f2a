//! Extracts embedded bits from a frame sequence.

use crate::video::{Frame, VideoError, VideoSource};

use super::RegionConfig;

/// A lazy bit cursor over the region cells of a frame sequence.
///
/// The cursor replays the embedder's traversal exactly: region cells in
/// row, then column, then channel order, frames in stream order. The
/// length prefix and the payload are two sequential reads that must
/// continue from the same position, without restarting frame iteration
/// in between.
pub struct FrameExtractor<'a, S: VideoSource> {
    source: &'a mut S,
    region: RegionConfig,
    frame: Option<Frame>,
    cell: usize,
    cells_in_frame: usize,
}

impl<'a, S: VideoSource> FrameExtractor<'a, S> {
    /// Creates a cursor positioned before the first region cell.
    pub fn new(source: &'a mut S, region: RegionConfig) -> Self {
        Self {
            source,
            region,
            frame: None,
            cell: 0,
            cells_in_frame: 0,
        }
    }

    /// Reads up to `n` bits, advancing the cursor.
    ///
    /// Returns fewer than `n` bits only when the source runs out of
    /// frames; the caller decides whether that truncation is an error.
    pub fn read_bits(&mut self, n: usize) -> Result<Vec<u8>, VideoError> {
        // `n` can be driven by an untrusted length prefix; grow the
        // buffer as bits actually arrive instead of reserving up front
        let mut bits = Vec::new();

        while bits.len() < n {
            if self.frame.is_none() || self.cell >= self.cells_in_frame {
                let Some(frame) = self.source.read_frame()? else {
                    break;
                };
                self.cells_in_frame = self.region.cells_per_frame(frame.width(), frame.height());
                self.cell = 0;
                self.frame = Some(frame);
                continue;
            }

            if let Some(frame) = &self.frame {
                let (row, col, channel) =
                    self.region
                        .cell(frame.width(), frame.height(), self.cell);
                bits.push(frame.sample(row, col, channel) & 1);
                self.cell += 1;
            }
        }

        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::BitStream;
    use crate::stego::embed;
    use crate::video::{MemorySink, MemorySource};

    fn embedded_frames(blob: &[u8], dims: (u32, u32), count: usize) -> Vec<Frame> {
        let frames: Vec<Frame> = (0..count).map(|_| Frame::new(dims.0, dims.1)).collect();
        let mut source = MemorySource::new(frames, 30.0);
        let mut sink = MemorySink::new();
        let stream = BitStream::for_blob(blob);
        embed(&mut source, &mut sink, &stream, &RegionConfig::default()).unwrap();
        sink.into_frames()
    }

    #[test]
    fn test_reads_back_embedded_bits() {
        let blob = [0xDE, 0xAD, 0xBE, 0xEF];
        let frames = embedded_frames(&blob, (10, 10), 1);
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        let bits = cursor.read_bits(32 + 32).unwrap();

        let expected: Vec<u8> = BitStream::for_blob(&blob).iter().collect();
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_sequential_reads_share_the_cursor() {
        let blob = [0xCA, 0xFE];
        let frames = embedded_frames(&blob, (10, 10), 1);
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        let prefix = cursor.read_bits(32).unwrap();
        let payload = cursor.read_bits(16).unwrap();

        let stream = BitStream::for_blob(&blob);
        let expected_prefix: Vec<u8> = stream.iter().take(32).collect();
        let expected_payload: Vec<u8> = stream.iter().skip(32).collect();

        assert_eq!(prefix, expected_prefix);
        assert_eq!(payload, expected_payload);
    }

    #[test]
    fn test_cursor_continues_across_frames() {
        // 2x2 frames hold 12 bits each, so the 32-bit prefix alone
        // spans three frames and the payload starts mid-frame
        let blob = [0x5A, 0xA5];
        let frames = embedded_frames(&blob, (2, 2), 4);
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        let prefix = cursor.read_bits(32).unwrap();
        let payload = cursor.read_bits(16).unwrap();

        assert_eq!(crate::framing::length_from_bits(&prefix), 2);
        assert_eq!(crate::framing::bytes_from_bits(&payload, 2), blob);
    }

    #[test]
    fn test_exhausted_source_returns_short_read() {
        // One 2x2 frame has only 12 bits
        let frames = vec![Frame::new(2, 2)];
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        let bits = cursor.read_bits(32).unwrap();

        assert_eq!(bits.len(), 12);
        assert!(cursor.read_bits(1).unwrap().is_empty());
    }

    #[test]
    fn test_hostile_bit_request_drains_without_reserving() {
        // A request far beyond any plausible video must not size an
        // allocation; it just drains the source and returns short
        let frames = vec![Frame::new(10, 10)];
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        let bits = cursor.read_bits(u32::MAX as usize * 8).unwrap();

        assert_eq!(bits.len(), 300);
    }

    #[test]
    fn test_zero_bit_read_does_not_consume() {
        let blob = [0x01];
        let frames = embedded_frames(&blob, (10, 10), 1);
        let mut source = MemorySource::new(frames, 30.0);

        let mut cursor = FrameExtractor::new(&mut source, RegionConfig::default());
        assert!(cursor.read_bits(0).unwrap().is_empty());

        let prefix = cursor.read_bits(32).unwrap();
        assert_eq!(crate::framing::length_from_bits(&prefix), 1);
    }
}

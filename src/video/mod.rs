//! Frame-sequence abstraction consumed by the steganography core.
//!
//! Video decode/encode and codec selection live outside this crate.
//! The core only needs a stream of mutable 8-bit RGB frames read in
//! order from a [`VideoSource`] and forwarded in order to a
//! [`VideoSink`]. Codec-backed implementations (FFmpeg and friends)
//! adapt to these traits; [`MemorySource`] and [`MemorySink`] cover
//! callers that already hold decoded frames, and the crate's tests.

use thiserror::Error;

/// Number of interleaved channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Errors that can occur at the video boundary.
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Failed to open video source: {0}")]
    Open(String),

    #[error("Failed to initialize video sink: {0}")]
    Init(String),

    #[error("Video stream error: {0}")]
    Stream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One decoded video frame: a row-major grid of 8-bit samples with
/// three interleaved channels per pixel.
///
/// Channel order is whatever the source produced; it is preserved
/// verbatim between source and sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Creates a black frame of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wraps raw interleaved samples, validating the buffer length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, VideoError> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(VideoError::Stream(format!(
                "frame buffer is {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                CHANNELS
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads the sample at `[row][col][channel]`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> u8 {
        self.data[self.offset(row, col, channel)]
    }

    /// Writes the sample at `[row][col][channel]`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn set_sample(&mut self, row: usize, col: usize, channel: usize, value: u8) {
        let offset = self.offset(row, col, channel);
        self.data[offset] = value;
    }

    /// Raw interleaved samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize, channel: usize) -> usize {
        debug_assert!(col < self.width as usize && row < self.height as usize);
        (row * self.width as usize + col) * CHANNELS + channel
    }
}

/// A sequential supplier of frames.
///
/// Implementations wrapping decoder or file handles must release them
/// in `Drop`, so every exit path, including errors, closes the source.
pub trait VideoSource {
    /// Reads the next frame, or `None` at end of stream.
    fn read_frame(&mut self) -> Result<Option<Frame>, VideoError>;

    /// Frame width in pixels.
    fn width(&self) -> u32;

    /// Frame height in pixels.
    fn height(&self) -> u32;

    /// Frames per second, forwarded to sinks when re-encoding.
    fn frame_rate(&self) -> f64;
}

/// A sequential consumer of frames.
///
/// Implementations wrapping encoder or file handles must release them
/// in `Drop`, including on error paths; callers discard the output of
/// a failed operation rather than commit it.
pub trait VideoSink {
    /// Appends one frame to the output, preserving arrival order.
    fn write_frame(&mut self, frame: Frame) -> Result<(), VideoError>;
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// A [`VideoSource`] over frames already held in memory.
pub struct MemorySource {
    frames: std::vec::IntoIter<Frame>,
    width: u32,
    height: u32,
    frame_rate: f64,
}

impl MemorySource {
    /// Creates a source that yields `frames` in order.
    ///
    /// Dimensions are taken from the first frame (zero if empty).
    pub fn new(frames: Vec<Frame>, frame_rate: f64) -> Self {
        let (width, height) = frames
            .first()
            .map(|f| (f.width(), f.height()))
            .unwrap_or((0, 0));
        Self {
            frames: frames.into_iter(),
            width,
            height,
            frame_rate,
        }
    }
}

impl VideoSource for MemorySource {
    fn read_frame(&mut self) -> Result<Option<Frame>, VideoError> {
        Ok(self.frames.next())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn frame_rate(&self) -> f64 {
        self.frame_rate
    }
}

/// A [`VideoSink`] that collects frames in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Vec<Frame>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames written so far, in arrival order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consumes the sink and returns the collected frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl VideoSink for MemorySink {
    fn write_frame(&mut self, frame: Frame) -> Result<(), VideoError> {
        self.frames.push(frame);
        Ok(())
    }
}

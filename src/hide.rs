//! The hide operation: encrypt a message and embed it in a video.
//!
//! Pipeline:
//! 1. Derive keys from the password and encrypt the message
//!    (AES-128-CBC + HMAC-SHA256)
//! 2. Frame the blob as a length-prefixed bit stream
//! 3. Write the bits into the region LSBs of successive frames,
//!    forwarding every frame to the sink

use thiserror::Error;

use crate::crypto::{encrypt, CipherError};
use crate::framing::BitStream;
use crate::stego::{embed, RegionConfig};
use crate::video::{VideoError, VideoSink, VideoSource};

/// Errors that can occur while hiding a message.
#[derive(Error, Debug)]
pub enum HideError {
    #[error("Empty password")]
    EmptyPassword,

    #[error("Empty message")]
    EmptyMessage,

    #[error("Payload needs {needed_bits} bits but only {written_bits} fit in the video")]
    CapacityExceeded {
        needed_bits: usize,
        written_bits: usize,
    },

    #[error("Encryption error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Video error: {0}")]
    Video(#[from] VideoError),
}

/// What to do when the frame sequence is too small for the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Fail with [`HideError::CapacityExceeded`]. The sink already holds
    /// every frame with a partial payload embedded; discard its output.
    #[default]
    Reject,
    /// Drop the remaining bits and report the shortfall in
    /// [`HideReport::bits_written`]. The result will not reveal cleanly.
    Truncate,
}

/// Configuration for the hide operation.
#[derive(Debug, Clone, Default)]
pub struct HideConfig {
    /// Frame region carrying the payload.
    pub region: RegionConfig,
    /// Behavior when capacity runs out.
    pub capacity: CapacityPolicy,
}

/// Result of a successful hide.
#[derive(Debug, Clone)]
pub struct HideReport {
    /// Bits the framed payload required.
    pub bits_total: usize,
    /// Bits actually embedded (less than `bits_total` only under
    /// [`CapacityPolicy::Truncate`]).
    pub bits_written: usize,
    /// Frames forwarded to the sink.
    pub frames_processed: usize,
}

/// Hides an encrypted message in a video with default configuration.
///
/// # Arguments
/// * `password` - Secret used for key derivation (never persisted)
/// * `message` - The text to hide
/// * `source` - Frame supplier; consumed to the end
/// * `sink` - Receives every frame, modified or not, in order
///
/// On error the sink may hold partially written frames; the caller
/// must discard its output rather than commit it.
pub fn hide<S, K>(
    password: &str,
    message: &str,
    source: &mut S,
    sink: &mut K,
) -> Result<HideReport, HideError>
where
    S: VideoSource,
    K: VideoSink,
{
    hide_with_config(password, message, source, sink, &HideConfig::default())
}

/// Hides an encrypted message with custom configuration.
pub fn hide_with_config<S, K>(
    password: &str,
    message: &str,
    source: &mut S,
    sink: &mut K,
    config: &HideConfig,
) -> Result<HideReport, HideError>
where
    S: VideoSource,
    K: VideoSink,
{
    if password.is_empty() {
        return Err(HideError::EmptyPassword);
    }
    if message.is_empty() {
        return Err(HideError::EmptyMessage);
    }

    let blob = encrypt(message, password)?;
    let bits = BitStream::for_blob(&blob);

    let stats = embed(source, sink, &bits, &config.region)?;

    if stats.bits_written < bits.len_bits() && config.capacity == CapacityPolicy::Reject {
        return Err(HideError::CapacityExceeded {
            needed_bits: bits.len_bits(),
            written_bits: stats.bits_written,
        });
    }

    Ok(HideReport {
        bits_total: bits.len_bits(),
        bits_written: stats.bits_written,
        frames_processed: stats.frames_processed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{Frame, MemorySink, MemorySource};

    #[test]
    fn test_empty_password_rejected() {
        let mut source = MemorySource::new(vec![Frame::new(120, 120)], 30.0);
        let mut sink = MemorySink::new();

        let result = hide("", "hi", &mut source, &mut sink);
        assert!(matches!(result, Err(HideError::EmptyPassword)));
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut source = MemorySource::new(vec![Frame::new(120, 120)], 30.0);
        let mut sink = MemorySink::new();

        let result = hide("hunter2", "", &mut source, &mut sink);
        assert!(matches!(result, Err(HideError::EmptyMessage)));
    }

    #[test]
    fn test_report_accounts_for_all_bits() {
        let frames: Vec<Frame> = (0..5).map(|_| Frame::new(120, 120)).collect();
        let mut source = MemorySource::new(frames, 30.0);
        let mut sink = MemorySink::new();

        let report = hide("hunter2", "hi", &mut source, &mut sink).unwrap();

        // "hi" encrypts to a 64-byte blob: 32 + 8 * 64 bits
        assert_eq!(report.bits_total, 32 + 8 * 64);
        assert_eq!(report.bits_written, report.bits_total);
        assert_eq!(report.frames_processed, 5);
    }

    #[test]
    fn test_reject_policy_on_tiny_video() {
        let mut source = MemorySource::new(vec![Frame::new(4, 4)], 30.0);
        let mut sink = MemorySink::new();

        let result = hide("hunter2", "hi", &mut source, &mut sink);
        assert!(matches!(
            result,
            Err(HideError::CapacityExceeded {
                needed_bits: 544,
                written_bits: 48,
            })
        ));
    }

    #[test]
    fn test_truncate_policy_reports_shortfall() {
        let mut source = MemorySource::new(vec![Frame::new(4, 4)], 30.0);
        let mut sink = MemorySink::new();
        let config = HideConfig {
            capacity: CapacityPolicy::Truncate,
            ..HideConfig::default()
        };

        let report =
            hide_with_config("hunter2", "hi", &mut source, &mut sink, &config).unwrap();

        assert_eq!(report.bits_written, 48);
        assert!(report.bits_written < report.bits_total);
        assert_eq!(sink.frames().len(), 1);
    }
}

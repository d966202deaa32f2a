//! The reveal operation: extract and decrypt a hidden message.
//!
//! Pipeline:
//! 1. Read the 32-bit length prefix from the region LSBs
//! 2. Read the payload bits, continuing from the same cursor position
//! 3. Regroup into the ciphertext blob, authenticate, decrypt
//!
//! The two reads share one continuous cursor over the frame sequence;
//! the payload starts at the cell right after the prefix, wherever in
//! the frame that happens to be.

use thiserror::Error;

use crate::crypto::{decrypt, CipherError};
use crate::framing::{bytes_from_bits, length_from_bits};
use crate::stego::{FrameExtractor, RegionConfig};
use crate::video::{VideoError, VideoSource};
use crate::LENGTH_PREFIX_BITS;

/// Errors that can occur while revealing a message.
#[derive(Error, Debug)]
pub enum RevealError {
    #[error("Empty password")]
    EmptyPassword,

    #[error("Video ended early: needed {needed_bits} bits, got {got_bits}")]
    Truncated {
        needed_bits: usize,
        got_bits: usize,
    },

    #[error("Decryption error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Video error: {0}")]
    Video(#[from] VideoError),
}

/// Configuration for the reveal operation.
///
/// The region must match the one used when hiding, or every extracted
/// bit after the first divergence is wrong.
#[derive(Debug, Clone, Default)]
pub struct RevealConfig {
    /// Frame region carrying the payload.
    pub region: RegionConfig,
}

/// Reveals a hidden message with default configuration.
///
/// Fails with [`CipherError::Authentication`] (wrapped in
/// [`RevealError::Cipher`]) when the password is wrong or the embedded
/// data was tampered with; the tag alone cannot tell the two apart.
pub fn reveal<S: VideoSource>(password: &str, source: &mut S) -> Result<String, RevealError> {
    reveal_with_config(password, source, &RevealConfig::default())
}

/// Reveals a hidden message with custom configuration.
pub fn reveal_with_config<S: VideoSource>(
    password: &str,
    source: &mut S,
    config: &RevealConfig,
) -> Result<String, RevealError> {
    if password.is_empty() {
        return Err(RevealError::EmptyPassword);
    }

    let mut cursor = FrameExtractor::new(source, config.region);

    let prefix = cursor.read_bits(LENGTH_PREFIX_BITS)?;
    if prefix.len() < LENGTH_PREFIX_BITS {
        return Err(RevealError::Truncated {
            needed_bits: LENGTH_PREFIX_BITS,
            got_bits: prefix.len(),
        });
    }

    let byte_len = length_from_bits(&prefix);
    let payload_bits = byte_len * 8;

    // Same cursor, no restart: the payload picks up where the prefix ended
    let payload = cursor.read_bits(payload_bits)?;
    if payload.len() < payload_bits {
        return Err(RevealError::Truncated {
            needed_bits: payload_bits,
            got_bits: payload.len(),
        });
    }

    let blob = bytes_from_bits(&payload, byte_len);
    Ok(decrypt(&blob, password)?)
}

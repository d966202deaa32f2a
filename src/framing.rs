//! Bit-level framing of ciphertext blobs.
//!
//! The wire format is a length-prefixed bit sequence:
//! - 32 bits: big-endian byte count of the blob
//! - 8 bits per blob byte, most significant bit first
//!
//! A blob of N bytes therefore always frames to exactly `32 + 8 * N`
//! bits. The embedder consumes these bits in order; the extractor
//! regroups them with [`length_from_bits`] and [`bytes_from_bits`].

use crate::LENGTH_PREFIX_BITS;

/// A framed ciphertext blob, exposed as an MSB-first bit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
}

impl BitStream {
    /// Frames a blob: 32-bit big-endian length prefix, then the blob bytes.
    ///
    /// The prefix holds 32 bits, so `blob` must be under 4 GiB.
    pub fn for_blob(blob: &[u8]) -> Self {
        debug_assert!(blob.len() <= u32::MAX as usize);
        let mut bytes = Vec::with_capacity(4 + blob.len());
        bytes.extend_from_slice(&(blob.len() as u32).to_be_bytes());
        bytes.extend_from_slice(blob);
        Self { bytes }
    }

    /// Total number of bits in the stream.
    pub fn len_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Returns bit `index` (0 or 1), MSB-first within each byte.
    ///
    /// # Panics
    /// Panics if `index >= len_bits()`.
    pub fn bit(&self, index: usize) -> u8 {
        (self.bytes[index / 8] >> (7 - index % 8)) & 1
    }

    /// Iterates over all bits in embedding order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len_bits()).map(move |i| self.bit(i))
    }
}

/// Decodes the 32-bit big-endian length prefix from extracted bits.
///
/// Only the first [`LENGTH_PREFIX_BITS`] bits are consumed; the caller
/// is responsible for supplying at least that many.
pub fn length_from_bits(bits: &[u8]) -> usize {
    bits.iter()
        .take(LENGTH_PREFIX_BITS)
        .fold(0usize, |acc, &bit| (acc << 1) | bit as usize)
}

/// Regroups extracted bits into bytes, MSB-first, up to `byte_len` bytes.
///
/// If fewer than `byte_len * 8` bits are supplied (source exhausted),
/// the result is a short buffer; a short or garbled blob fails
/// downstream authentication, which is the integrity backstop.
pub fn bytes_from_bits(bits: &[u8], byte_len: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(byte_len.min(bits.len() / 8));

    for chunk in bits.chunks(8).take(byte_len) {
        if chunk.len() < 8 {
            break;
        }
        let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
        bytes.push(byte);
    }

    bytes
}

//! # Framehide - Hide encrypted text in video pixels
//!
//! Framehide hides an authenticated, encrypted text payload in the
//! least significant bits of a video's pixel data, recoverable only
//! with the correct password.
//!
//! ## Overview
//!
//! - Message is encrypted with **AES-128-CBC** under a password-derived key
//! - An **HMAC-SHA256** tag authenticates the ciphertext; a wrong
//!   password or a single flipped bit fails with an authentication
//!   error, never garbage output
//! - The blob is framed as a **32-bit length prefix** plus MSB-first
//!   payload bits
//! - Bits ride in **bit 0** of the samples in the top-left 100x100
//!   region of successive frames, one continuous cursor across the
//!   whole sequence
//! - Frames beyond the payload pass through **byte-identical**; frame
//!   count and non-region pixels are never touched
//!
//! Video decode/encode stays outside the crate: anything that can
//! supply and receive raw RGB frames plugs in through the
//! [`VideoSource`] and [`VideoSink`] traits. The format does not
//! survive lossy re-encoding; use it with lossless codecs.
//!
//! ## Example Usage
//!
//! ```rust
//! use framehide::{hide, reveal, Frame, MemorySink, MemorySource};
//!
//! // Five blank 120x120 frames stand in for a decoded video
//! let frames: Vec<Frame> = (0..5).map(|_| Frame::new(120, 120)).collect();
//! let mut source = MemorySource::new(frames, 30.0);
//! let mut sink = MemorySink::new();
//!
//! hide("hunter2", "hi", &mut source, &mut sink).unwrap();
//!
//! let mut stego = MemorySource::new(sink.into_frames(), 30.0);
//! let message = reveal("hunter2", &mut stego).unwrap();
//! assert_eq!(message, "hi");
//! ```
//!
//! ## Modules
//!
//! - [`crypto`]: key derivation and authenticated encryption
//! - [`framing`]: length-prefixed bit framing of ciphertext blobs
//! - [`stego`]: LSB embed/extract over a bounded frame region
//! - [`video`]: frame grid and source/sink traits
//! - [`hide`](crate::hide()) / [`reveal`](crate::reveal()): the two
//!   top-level operations

/// Side length of the default square embedding region, in pixels.
pub const REGION_SIZE: usize = 100;

/// Bits in the payload length prefix.
pub const LENGTH_PREFIX_BITS: usize = 32;

pub mod crypto;
pub mod framing;
pub mod stego;
pub mod video;

mod hide;
mod reveal;

// Re-export commonly used types at the crate root
pub use crypto::{derive_keys, CipherError, DerivedKeys};
pub use framing::BitStream;
pub use hide::{
    hide, hide_with_config, CapacityPolicy, HideConfig, HideError, HideReport,
};
pub use reveal::{reveal, reveal_with_config, RevealConfig, RevealError};
pub use stego::{FrameExtractor, RegionConfig};
pub use video::{Frame, MemorySink, MemorySource, VideoError, VideoSink, VideoSource};

//! Cryptographic operations for Framehide.
//!
//! Two layers:
//! - [`keys`]: password-based key derivation (SHA-256 split into two keys)
//! - [`cipher`]: authenticated encryption (AES-128-CBC + HMAC-SHA256)

pub mod cipher;
pub mod keys;

pub use cipher::{decrypt, encrypt, CipherError};
pub use keys::{derive_keys, DerivedKeys};

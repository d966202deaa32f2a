//! Authenticated encryption for Framehide payloads.
//!
//! Encrypt-then-MAC with independent keys derived from the password:
//! - AES-128-CBC with PKCS#7 padding and a random 16-byte IV
//! - HMAC-SHA256 tag over the ciphertext (not the IV)
//!
//! Blob layout: `IV (16 bytes) || ciphertext (16-byte blocks) || tag (32 bytes)`
//!
//! Decryption verifies the tag with a constant-time comparison BEFORE
//! touching the ciphertext. Unauthenticated data is never decrypted, so
//! padding and UTF-8 failures are defensive checks that only fire on
//! blobs that already passed authentication.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use sha2::Sha256;
use thiserror::Error;

use super::keys::derive_keys;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

/// IV size for AES-CBC.
pub const IV_SIZE: usize = 16;

/// AES block size; ciphertext length is always a multiple of this.
pub const BLOCK_SIZE: usize = 16;

/// HMAC-SHA256 tag size.
pub const TAG_SIZE: usize = 32;

/// Smallest well-formed blob: IV + one cipher block + tag.
pub const MIN_BLOB_SIZE: usize = IV_SIZE + BLOCK_SIZE + TAG_SIZE;

/// Errors that can occur during payload encryption/decryption.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Ciphertext blob too short: {got} bytes, need at least {MIN_BLOB_SIZE}")]
    CiphertextTooShort { got: usize },

    #[error("Authentication failed: wrong password or corrupted data")]
    Authentication,

    #[error("Invalid padding in decrypted data")]
    Padding,

    #[error("Decrypted data is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Key setup failed")]
    KeySetup,
}

/// Encrypts a message with a password.
///
/// Output format: `IV (16 bytes) || ciphertext || HMAC tag (32 bytes)`.
/// The IV is drawn fresh from the OS random source on every call, so
/// encrypting the same message twice yields different blobs.
pub fn encrypt(message: &str, password: &str) -> Result<Vec<u8>, CipherError> {
    let keys = derive_keys(password);

    // Random IV per message
    let mut iv = [0u8; IV_SIZE];
    rand::RngCore::fill_bytes(&mut OsRng, &mut iv);

    let ciphertext = Aes128CbcEnc::new(&keys.cipher_key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(message.as_bytes());

    // Tag covers the ciphertext only, matching the wire format
    let mut mac =
        HmacSha256::new_from_slice(&keys.mac_key).map_err(|_| CipherError::KeySetup)?;
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut blob = Vec::with_capacity(IV_SIZE + ciphertext.len() + TAG_SIZE);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    blob.extend_from_slice(&tag);

    Ok(blob)
}

/// Decrypts a blob with a password.
///
/// Expects input format: `IV (16 bytes) || ciphertext || HMAC tag (32 bytes)`.
/// The tag is verified in constant time before any decryption happens.
pub fn decrypt(blob: &[u8], password: &str) -> Result<String, CipherError> {
    if blob.len() < MIN_BLOB_SIZE {
        return Err(CipherError::CiphertextTooShort { got: blob.len() });
    }

    let (iv, rest) = blob.split_at(IV_SIZE);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_SIZE);

    let keys = derive_keys(password);

    // Authenticate-then-decrypt: never run the cipher on unverified data
    let mut mac =
        HmacSha256::new_from_slice(&keys.mac_key).map_err(|_| CipherError::KeySetup)?;
    mac.update(ciphertext);
    mac.verify_slice(tag)
        .map_err(|_| CipherError::Authentication)?;

    let padded = Aes128CbcDec::new_from_slices(&keys.cipher_key, iv)
        .map_err(|_| CipherError::KeySetup)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::Padding)?;

    Ok(String::from_utf8(padded)?)
}

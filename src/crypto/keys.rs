//! Password-based key derivation for Framehide.
//!
//! A single SHA-256 digest of the UTF-8 password is split in half:
//! the first 16 bytes key the block cipher, the last 16 key the MAC.
//! No salt is involved, so the same password always yields the same
//! keys - that is what makes the embedded payload recoverable from the
//! video alone, but it also means brute-force resistance is bounded
//! entirely by password strength.

use sha2::{Digest, Sha256};

/// Size of each derived key in bytes.
pub const KEY_SIZE: usize = 16;

/// The two keys derived from a password.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    /// Key for AES-128-CBC encryption.
    pub cipher_key: [u8; KEY_SIZE],
    /// Key for the HMAC-SHA256 authentication tag.
    pub mac_key: [u8; KEY_SIZE],
}

impl std::fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose key material in debug output
        f.debug_struct("DerivedKeys")
            .field("cipher_key", &"[REDACTED]")
            .field("mac_key", &"[REDACTED]")
            .finish()
    }
}

/// Derives the cipher and MAC keys from a password.
///
/// Deterministic and infallible: any string input (including the empty
/// string) produces keys. Callers that treat an empty password as a
/// user error must reject it before calling in.
pub fn derive_keys(password: &str) -> DerivedKeys {
    let digest = Sha256::digest(password.as_bytes());

    let mut cipher_key = [0u8; KEY_SIZE];
    let mut mac_key = [0u8; KEY_SIZE];
    cipher_key.copy_from_slice(&digest[..KEY_SIZE]);
    mac_key.copy_from_slice(&digest[KEY_SIZE..]);

    DerivedKeys {
        cipher_key,
        mac_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let keys1 = derive_keys("hunter2");
        let keys2 = derive_keys("hunter2");

        assert_eq!(keys1.cipher_key, keys2.cipher_key);
        assert_eq!(keys1.mac_key, keys2.mac_key);
    }

    #[test]
    fn test_distinct_passwords_distinct_keys() {
        let keys1 = derive_keys("hunter2");
        let keys2 = derive_keys("hunter3");

        assert_ne!(keys1.cipher_key, keys2.cipher_key);
        assert_ne!(keys1.mac_key, keys2.mac_key);
    }

    #[test]
    fn test_cipher_and_mac_keys_differ() {
        let keys = derive_keys("hunter2");
        assert_ne!(keys.cipher_key, keys.mac_key);
    }

    #[test]
    fn test_empty_password_still_derives() {
        let keys = derive_keys("");
        assert_eq!(keys.cipher_key.len(), KEY_SIZE);
        assert_eq!(keys.mac_key.len(), KEY_SIZE);
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let keys = derive_keys("hunter2");
        let debug = format!("{:?}", keys);
        assert!(debug.contains("REDACTED"));
    }
}

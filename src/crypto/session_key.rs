//! Per-run session keys
//!
//! One 256-bit key is generated per backup run and protects every
//! credential file in that run. Key material is zeroed on drop.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::{engine::general_purpose::STANDARD, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{VaultError, VaultResult};

/// Size of the session key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// The single symmetric key protecting one backup run
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey {
    key: [u8; KEY_SIZE],
}

impl SessionKey {
    /// Generate a fresh key from the operating system's CSPRNG
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Reconstruct a key from its base64 form (archive consumers)
    pub fn from_base64(encoded: &str) -> VaultResult<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| VaultError::Encryption(format!("Invalid key encoding: {}", e)))?;
        if bytes.len() != KEY_SIZE {
            return Err(VaultError::Encryption(format!(
                "Invalid key size: expected {}, got {}",
                KEY_SIZE,
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&bytes);
        Ok(Self { key })
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// base64 form for manifest embedding
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.key)
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        f.write_str("SessionKey([redacted])")
    }
}

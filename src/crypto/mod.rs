//! Cryptographic functions for dotvault
//!
//! Provides AES-256-GCM authenticated encryption of credential files
//! under a per-run session key.

pub mod encryption;
pub mod session_key;

pub use encryption::{decrypt_blob, encrypt_bytes, encrypt_file};
pub use session_key::SessionKey;

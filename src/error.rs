//! Custom error types for dotvault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dotvault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Encryption errors (cipher construction, sealing, blob decoding)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Archive packaging errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Discovery errors while scanning locations
    #[error("Scan error: {0}")]
    Scan(String),

    /// Package replication errors (distro detection, package managers)
    #[error("Replication error: {0}")]
    Replicate(String),

    /// Unsupported platform
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl VaultError {
    /// Check if this is an encryption error
    pub fn is_encryption(&self) -> bool {
        matches!(self, Self::Encryption(_))
    }

    /// Check if this is an archive error
    pub fn is_archive(&self) -> bool {
        matches!(self, Self::Archive(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dotvault operations
pub type VaultResult<T> = Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VaultError::Encryption("bad nonce".into());
        assert_eq!(err.to_string(), "Encryption error: bad nonce");
    }

    #[test]
    fn test_unsupported_platform_display() {
        let err = VaultError::UnsupportedPlatform("macos; dotvault is Linux-only".into());
        assert_eq!(
            err.to_string(),
            "Unsupported platform: macos; dotvault is Linux-only"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let vault_err: VaultError = io_err.into();
        assert!(matches!(vault_err, VaultError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let vault_err: VaultError = json_err.into();
        assert!(matches!(vault_err, VaultError::Json(_)));
    }

    #[test]
    fn test_error_kind_helpers() {
        assert!(VaultError::Encryption("x".into()).is_encryption());
        assert!(VaultError::Archive("x".into()).is_archive());
        assert!(!VaultError::Io("x".into()).is_encryption());
    }
}

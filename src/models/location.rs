//! Discovered key locations
//!
//! A `Location` is a filesystem path (file or directory) believed to hold
//! credential material, tagged with the kind of keys it contains. The tag
//! is fixed at discovery time and never reclassified.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The kind of credential material a location holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// SSH keys and related files (`~/.ssh`)
    Ssh,
    /// GPG keyrings and configuration (`~/.gnupg`)
    Gpg,
    /// User-supplied paths outside the well-known directories
    Custom,
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyType::Ssh => write!(f, "ssh"),
            KeyType::Gpg => write!(f, "gpg"),
            KeyType::Custom => write!(f, "custom"),
        }
    }
}

/// A discovered directory or file believed to hold credentials
#[derive(Debug, Clone)]
pub struct Location {
    /// Absolute path of the location root
    pub path: PathBuf,
    /// Kind of keys, fixed at discovery time
    pub key_type: KeyType,
    /// Member files (absolute paths); always non-empty
    pub files: Vec<PathBuf>,
    /// Whether the root is a directory (false for single-file custom paths)
    pub is_directory: bool,
}

impl Location {
    /// A location covering a single file
    pub fn single_file(path: PathBuf, key_type: KeyType) -> Self {
        Self {
            path: path.clone(),
            key_type,
            files: vec![path],
            is_directory: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&KeyType::Ssh).unwrap(), "\"ssh\"");
        assert_eq!(serde_json::to_string(&KeyType::Gpg).unwrap(), "\"gpg\"");
        assert_eq!(
            serde_json::to_string(&KeyType::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn test_key_type_display_matches_wire_form() {
        assert_eq!(KeyType::Ssh.to_string(), "ssh");
        assert_eq!(KeyType::Gpg.to_string(), "gpg");
        assert_eq!(KeyType::Custom.to_string(), "custom");
    }

    #[test]
    fn test_single_file_location() {
        let loc = Location::single_file(PathBuf::from("/opt/certs/server.pem"), KeyType::Custom);
        assert!(!loc.is_directory);
        assert_eq!(loc.files.len(), 1);
        assert_eq!(loc.path, loc.files[0]);
    }
}

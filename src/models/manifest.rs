//! Backup manifests
//!
//! The manifest is the root document of every archive, always written as
//! its first entry. Key backups carry a map of encrypted records plus the
//! session key; dotfile backups carry the ordered dotfile list that also
//! dictates payload entry order.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Dotfile, KeyType};

/// Canonical name of the manifest entry inside every archive
pub const MANIFEST_NAME: &str = "backup.json";

/// Basic identity of the system a backup was taken on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub username: String,
    pub os: String,
}

impl SystemInfo {
    /// Collect identity from the running system
    pub fn collect() -> Self {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();
        let username = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_default();

        Self {
            hostname: host,
            username,
            os: "linux".to_string(),
        }
    }
}

/// One encrypted credential file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedRecord {
    /// Absolute path the file was read from, preserved for restore
    pub original_path: String,
    /// Type tag inherited from the location the file was found in
    pub key_type: KeyType,
    /// base64(nonce || ciphertext || auth tag) under the session key
    pub encrypted_data: String,
    /// Unix permission bits from the source stat
    pub permissions: u32,
}

/// Root document of a key backup archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBackupManifest {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    /// record-id -> encrypted record
    pub encrypted_keys: BTreeMap<String, EncryptedRecord>,
    /// base64-encoded session key; protects nothing against a holder of
    /// the archive, kept to match the original format
    pub encryption_key: String,
}

impl KeyBackupManifest {
    pub fn new(timestamp: DateTime<Utc>, system_info: SystemInfo, encryption_key: String) -> Self {
        Self {
            timestamp,
            system_info,
            encrypted_keys: BTreeMap::new(),
            encryption_key,
        }
    }

    /// Insert a record under its derived id
    pub fn insert(&mut self, path: &Path, record: EncryptedRecord) {
        self.encrypted_keys.insert(record_id(path), record);
    }

    pub fn len(&self) -> usize {
        self.encrypted_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encrypted_keys.is_empty()
    }
}

/// Root document of a dotfile backup archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotfileManifest {
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub files: Vec<Dotfile>,
}

/// Derive the manifest key for one encrypted file.
///
/// `basename + "_" + path-with-slashes-replaced-by-underscores`: distinct
/// absolute paths never collide within one run, even with equal basenames.
pub fn record_id(path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let flattened = path.to_string_lossy().replace('/', "_");
    format!("{}_{}", basename, flattened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_record_id_format() {
        let id = record_id(Path::new("/home/user/.ssh/id_rsa"));
        assert_eq!(id, "id_rsa__home_user_.ssh_id_rsa");
    }

    #[test]
    fn test_record_id_same_basename_different_dirs() {
        let a = record_id(Path::new("/home/user/.ssh/config"));
        let b = record_id(Path::new("/home/user/.gnupg/config"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_manifest_insert_and_count() {
        let mut manifest = KeyBackupManifest::new(
            Utc::now(),
            SystemInfo {
                hostname: "host".into(),
                username: "user".into(),
                os: "linux".into(),
            },
            "a2V5".into(),
        );
        assert!(manifest.is_empty());

        let path = PathBuf::from("/home/user/.ssh/id_ed25519");
        manifest.insert(
            &path,
            EncryptedRecord {
                original_path: path.display().to_string(),
                key_type: KeyType::Ssh,
                encrypted_data: "blob".into(),
                permissions: 0o600,
            },
        );
        assert_eq!(manifest.len(), 1);
        assert!(manifest.encrypted_keys.contains_key(&record_id(&path)));
    }

    #[test]
    fn test_key_manifest_schema_fields() {
        let manifest = KeyBackupManifest::new(
            Utc::now(),
            SystemInfo {
                hostname: "host".into(),
                username: "user".into(),
                os: "linux".into(),
            },
            "a2V5".into(),
        );
        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json.get("timestamp").is_some());
        assert!(json.get("system_info").is_some());
        assert!(json.get("encrypted_keys").is_some());
        assert!(json.get("encryption_key").is_some());
        assert_eq!(json["system_info"]["os"], "linux");
    }
}

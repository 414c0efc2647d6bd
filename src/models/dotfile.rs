//! Snapshotted configuration files
//!
//! A `Dotfile` records one well-known configuration file or directory.
//! Content is embedded only for NUL-free regular files; binary files and
//! directories carry metadata only so the manifest stays valid text.

use serde::{Deserialize, Serialize};

/// A snapshotted configuration file or directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dotfile {
    /// Absolute path on the source system
    pub path: String,
    /// Path relative to the home directory
    pub rel_path: String,
    /// Whether this entry is a directory
    pub is_dir: bool,
    /// Whether the file content is binary (contains a NUL byte)
    pub is_binary: bool,
    /// Unix permission bits from the source stat
    pub mode: u32,
    /// File content; empty for directories and binary files. NUL-free
    /// non-UTF-8 bytes are kept with UTF-8 replacement characters; the
    /// archive payload carries the exact bytes.
    #[serde(default)]
    pub content: String,
}

impl Dotfile {
    /// Whether this entry gets a payload body in the archive
    pub fn has_payload(&self) -> bool {
        !self.is_dir && !self.is_binary
    }
}

//! Core data models for dotvault
//!
//! This module contains the data structures that represent the backup
//! domain: discovered key locations, snapshotted dotfiles, encrypted
//! records, and the manifests embedded in produced archives.

pub mod dotfile;
pub mod location;
pub mod manifest;

pub use dotfile::Dotfile;
pub use location::{KeyType, Location};
pub use manifest::{
    record_id, DotfileManifest, EncryptedRecord, KeyBackupManifest, SystemInfo, MANIFEST_NAME,
};

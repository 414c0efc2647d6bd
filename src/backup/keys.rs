//! Key backup orchestrator
//!
//! One pass: generate a session key, discover locations, encrypt every
//! member file, assemble the manifest, package. Unreadable files are
//! skipped and recorded; cipher construction failures and archive I/O
//! failures terminate the run.

use std::os::unix::fs::PermissionsExt;

use chrono::Utc;
use tracing::{debug, warn};

use crate::archive::write_key_archive;
use crate::config::paths::VaultPaths;
use crate::crypto::{encrypt_file, SessionKey};
use crate::error::{VaultError, VaultResult};
use crate::models::{EncryptedRecord, KeyBackupManifest, Location, SystemInfo};
use crate::scanner::{scan_custom_paths, scan_standard_locations};

use super::{BackupOutcome, SkippedFile};

/// Orchestrates one key backup run
pub struct KeyBackupManager {
    paths: VaultPaths,
}

impl KeyBackupManager {
    pub fn new(paths: VaultPaths) -> Self {
        Self { paths }
    }

    /// Run a full key backup: standard locations merged with the given
    /// custom paths.
    pub fn run(&self, custom_paths: &[String]) -> VaultResult<BackupOutcome> {
        let mut locations = scan_standard_locations();
        locations.extend(scan_custom_paths(custom_paths));
        self.run_with_locations(locations)
    }

    pub(crate) fn run_with_locations(
        &self,
        locations: Vec<Location>,
    ) -> VaultResult<BackupOutcome> {
        if locations.is_empty() {
            return Ok(BackupOutcome::NothingToBackUp);
        }

        let session_key = SessionKey::generate();
        let mut manifest = KeyBackupManifest::new(
            Utc::now(),
            SystemInfo::collect(),
            session_key.to_base64(),
        );
        let mut skipped = Vec::new();

        for location in &locations {
            self.process_location(location, &session_key, &mut manifest, &mut skipped)?;
        }

        let archive = self.paths.key_archive(manifest.timestamp);
        self.paths
            .ensure_output_dir()
            .map_err(|e| VaultError::Archive(format!("Failed to create output dir: {}", e)))?;
        write_key_archive(&manifest, &archive)?;

        Ok(BackupOutcome::Archived {
            archive,
            records: manifest.len(),
            skipped,
        })
    }

    /// Encrypt and record every file of one location.
    ///
    /// Unreadable files become `SkippedFile` entries; only encryption-
    /// internal failures propagate (they indicate a corrupted key, which
    /// cannot happen with an internally generated one).
    fn process_location(
        &self,
        location: &Location,
        session_key: &SessionKey,
        manifest: &mut KeyBackupManifest,
        skipped: &mut Vec<SkippedFile>,
    ) -> VaultResult<()> {
        debug!(
            location = %location.path.display(),
            key_type = %location.key_type,
            files = location.files.len(),
            "encrypting location"
        );

        for path in &location.files {
            let metadata = match std::fs::metadata(path) {
                Ok(m) => m,
                Err(err) => {
                    warn!(path = %path.display(), %err, "cannot stat file, skipping");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: format!("stat failed: {}", err),
                    });
                    continue;
                }
            };

            let encrypted_data = match encrypt_file(path, session_key) {
                Ok(blob) => blob,
                Err(VaultError::Io(reason)) => {
                    warn!(path = %path.display(), %reason, "cannot read file, skipping");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            manifest.insert(
                path,
                EncryptedRecord {
                    original_path: path.display().to_string(),
                    key_type: location.key_type,
                    encrypted_data,
                    permissions: metadata.permissions().mode() & 0o7777,
                },
            );
        }
        Ok(())
    }
}

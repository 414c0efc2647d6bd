//! Dotfile backup orchestrator
//!
//! Snapshots the well-known dotfiles into `dist/dotfile-backup.tar.gz`.
//! No encryption is applied; content travels in the manifest and payload
//! entries as-is.

use chrono::Utc;

use crate::archive::write_dotfile_archive;
use crate::config::paths::VaultPaths;
use crate::error::{VaultError, VaultResult};
use crate::models::{Dotfile, DotfileManifest};
use crate::scanner::scan_dotfiles;

use super::BackupOutcome;

/// Orchestrates one dotfile backup run
pub struct DotfileBackupManager {
    paths: VaultPaths,
}

impl DotfileBackupManager {
    pub fn new(paths: VaultPaths) -> Self {
        Self { paths }
    }

    /// Run a full dotfile backup.
    pub fn run(&self) -> VaultResult<BackupOutcome> {
        self.run_with_files(scan_dotfiles())
    }

    pub(crate) fn run_with_files(&self, files: Vec<Dotfile>) -> VaultResult<BackupOutcome> {
        if files.is_empty() {
            return Ok(BackupOutcome::NothingToBackUp);
        }

        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();

        let records = files.len();
        let manifest = DotfileManifest {
            timestamp: Utc::now(),
            hostname,
            files,
        };

        let archive = self.paths.dotfile_archive();
        self.paths
            .ensure_output_dir()
            .map_err(|e| VaultError::Archive(format!("Failed to create output dir: {}", e)))?;
        write_dotfile_archive(&manifest, &archive)?;

        Ok(BackupOutcome::Archived {
            archive,
            records,
            skipped: Vec::new(),
        })
    }
}

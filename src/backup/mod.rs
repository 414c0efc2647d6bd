//! Backup orchestration
//!
//! Composes the scanners, the encryption unit, and the archive packager
//! into one end-to-end run per backup kind. Both kinds are terminal after
//! a single pass; nothing is retained across runs (fresh session key,
//! fresh timestamp each invocation).

pub mod dotfiles;
pub mod keys;

use std::path::PathBuf;

pub use dotfiles::DotfileBackupManager;
pub use keys::KeyBackupManager;

/// A per-file failure absorbed during a run, kept explicit so callers
/// and tests can see exactly what was skipped and why
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Terminal state of one backup run
#[derive(Debug)]
pub enum BackupOutcome {
    /// An archive was written
    Archived {
        archive: PathBuf,
        /// Number of records (encrypted keys or dotfiles) in the manifest
        records: usize,
        /// Files skipped with their reasons; never fatal
        skipped: Vec<SkippedFile>,
    },
    /// Nothing matched; a valid success with no archive produced
    NothingToBackUp,
}

//! Path management for dotvault
//!
//! Provides home-directory expansion, the well-known credential and
//! dotfile location tables, and the output paths for produced archives.
//!
//! ## Home Resolution
//!
//! `~`-relative paths are expanded against `$HOME`. Expansion never
//! fails: when `$HOME` is unset the input is returned unchanged and the
//! caller's existence checks fail naturally.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Well-known directories that commonly hold credential material.
/// More can be added here.
pub const STANDARD_KEY_LOCATIONS: &[&str] = &["~/.ssh", "~/.gnupg"];

/// Well-known dotfile paths snapshotted by the dotfile backup.
pub const DOTFILE_PATHS: &[&str] = &[
    "~/.bashrc",
    "~/.zshrc",
    "~/.vimrc",
    "~/.config",
    "~/.bash_history",
    "~/.zsh_history",
    "~/.gitconfig",
    "~/.profile",
    "~/.npmrc",
];

/// Expand a leading `~` to the user's home directory.
///
/// Returns the input unchanged when it does not start with `~` or when
/// the home directory cannot be determined.
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if let Some(home) = home_dir() {
            return PathBuf::from(format!("{}{}", home, rest));
        }
    }
    PathBuf::from(raw)
}

/// The user's home directory, from `$HOME`.
pub fn home_dir() -> Option<String> {
    std::env::var("HOME").ok().filter(|h| !h.is_empty())
}

/// Manages output paths for produced archives
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Directory archives are written to
    output_dir: PathBuf,
}

impl Default for VaultPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultPaths {
    /// Create paths rooted at the default `dist/` output directory
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }

    /// Create paths with a custom output directory (useful for testing)
    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Archive path for a key backup started at `timestamp`:
    /// `dist/key-backup-<%Y-%m-%d-%H-%M-%S>.tar.gz`
    pub fn key_archive(&self, timestamp: DateTime<Utc>) -> PathBuf {
        self.output_dir.join(format!(
            "key-backup-{}.tar.gz",
            timestamp.format("%Y-%m-%d-%H-%M-%S")
        ))
    }

    /// Archive path for a dotfile backup: `dist/dotfile-backup.tar.gz`
    pub fn dotfile_archive(&self) -> PathBuf {
        self.output_dir.join("dotfile-backup.tar.gz")
    }

    /// Ensure the output directory exists
    pub fn ensure_output_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.output_dir)
    }
}

//! Key location discovery
//!
//! Walks the well-known credential directories plus any user-supplied
//! custom paths and produces `Location`s. A root that cannot be walked is
//! skipped with a warning; a root with no matching files yields nothing.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::paths::{expand_home, STANDARD_KEY_LOCATIONS};
use crate::error::{VaultError, VaultResult};
use crate::models::{KeyType, Location};

use super::classify::{is_credential_file, key_type_for};

/// Search the standard key locations for credential files.
///
/// Absence of a root is not an error; a traversal error aborts discovery
/// for that root only.
pub fn scan_standard_locations() -> Vec<Location> {
    scan_roots(STANDARD_KEY_LOCATIONS)
}

pub(crate) fn scan_roots(roots: &[&str]) -> Vec<Location> {
    let mut locations = Vec::new();

    for raw in roots {
        let root = expand_home(raw);
        if !root.exists() {
            continue;
        }

        let key_type = key_type_for(&root);
        let files = match discover_key_files(&root) {
            Ok(files) => files,
            Err(err) => {
                warn!(root = %root.display(), %err, "skipping unwalkable location");
                continue;
            }
        };

        if !files.is_empty() {
            locations.push(Location {
                path: root,
                key_type,
                files,
                is_directory: true,
            });
        }
    }

    locations
}

/// Convert user-supplied custom paths into locations.
///
/// Unreachable paths are warned about and skipped; directories are walked
/// like standard roots, single files become one-element locations.
pub fn scan_custom_paths(paths: &[String]) -> Vec<Location> {
    paths
        .iter()
        .filter(|p| !p.trim().is_empty())
        .filter_map(|p| scan_custom_path(p))
        .collect()
}

fn scan_custom_path(raw: &str) -> Option<Location> {
    let path = expand_home(raw.trim());

    let metadata = match std::fs::metadata(&path) {
        Ok(m) => m,
        Err(_) => {
            warn!(path = %path.display(), "custom path does not exist, skipping");
            return None;
        }
    };

    if metadata.is_dir() {
        let files = match discover_key_files(&path) {
            Ok(files) => files,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to scan custom directory");
                return None;
            }
        };

        if files.is_empty() {
            return None;
        }

        Some(Location {
            path,
            key_type: KeyType::Custom,
            files,
            is_directory: true,
        })
    } else {
        Some(Location::single_file(path, KeyType::Custom))
    }
}

/// Recursively collect credential files under a directory.
///
/// The first traversal error aborts the walk; the caller decides whether
/// the root as a whole is skipped.
fn discover_key_files(root: &Path) -> VaultResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| VaultError::Scan(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if is_credential_file(&name) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

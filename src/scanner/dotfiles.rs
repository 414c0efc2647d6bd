//! Dotfile discovery
//!
//! Enumerates the fixed dotfile table, capturing metadata for every entry
//! that exists and content for NUL-free regular files. Binary content is
//! never embedded as text; only the flag is set.

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::warn;

use crate::config::paths::{expand_home, home_dir, DOTFILE_PATHS};
use crate::models::Dotfile;

/// Scan the well-known dotfile paths.
///
/// Missing paths are skipped silently (most systems lack several of
/// them); individual read failures are warned about and skipped.
pub fn scan_dotfiles() -> Vec<Dotfile> {
    let home = home_dir().unwrap_or_default();
    DOTFILE_PATHS
        .iter()
        .filter_map(|raw| scan_one(&expand_home(raw), Path::new(&home)))
        .collect()
}

fn scan_one(full: &Path, home: &Path) -> Option<Dotfile> {
    let metadata = std::fs::metadata(full).ok()?;

    let rel_path = full
        .strip_prefix(home)
        .unwrap_or(full)
        .to_string_lossy()
        .into_owned();

    let mut entry = Dotfile {
        path: full.to_string_lossy().into_owned(),
        rel_path,
        is_dir: metadata.is_dir(),
        is_binary: false,
        mode: metadata.permissions().mode() & 0o7777,
        content: String::new(),
    };

    if !entry.is_dir {
        let data = match std::fs::read(full) {
            Ok(data) => data,
            Err(err) => {
                warn!(path = %full.display(), %err, "failed to read dotfile, skipping");
                return None;
            }
        };

        if contains_nul(&data) {
            entry.is_binary = true;
        } else {
            entry.content = String::from_utf8_lossy(&data).into_owned();
        }
    }

    Some(entry)
}

/// Binary detection: any NUL byte marks the file as binary
fn contains_nul(data: &[u8]) -> bool {
    data.contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_text_file_content_embedded() {
        let home = TempDir::new().unwrap();
        let file = home.path().join(".bashrc");
        fs::write(&file, "export EDITOR=vim\n").unwrap();

        let entry = scan_one(&file, home.path()).unwrap();
        assert_eq!(entry.rel_path, ".bashrc");
        assert!(!entry.is_dir);
        assert!(!entry.is_binary);
        assert_eq!(entry.content, "export EDITOR=vim\n");
    }

    #[test]
    fn test_binary_file_metadata_only() {
        let home = TempDir::new().unwrap();
        let file = home.path().join(".zsh_history");
        fs::write(&file, b"abc\x00def").unwrap();

        let entry = scan_one(&file, home.path()).unwrap();
        assert!(entry.is_binary);
        assert_eq!(entry.content, "");
    }

    #[test]
    fn test_directory_has_no_content() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(".config");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("app.toml"), "ignored").unwrap();

        let entry = scan_one(&dir, home.path()).unwrap();
        assert!(entry.is_dir);
        assert!(!entry.is_binary);
        assert_eq!(entry.content, "");
    }

    #[test]
    fn test_missing_path_skipped() {
        let home = TempDir::new().unwrap();
        assert!(scan_one(&home.path().join(".vimrc"), home.path()).is_none());
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let home = TempDir::new().unwrap();
        let file = home.path().join(".bash_history");
        fs::write(&file, "secret command\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read(&file).is_ok() {
            // running as root, permission bits are not enforced
            return;
        }

        assert!(scan_one(&file, home.path()).is_none());
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn test_non_utf8_text_kept_with_replacement_characters() {
        let home = TempDir::new().unwrap();
        let file = home.path().join(".zsh_history");
        fs::write(&file, b"caf\xe9\n").unwrap();

        let entry = scan_one(&file, home.path()).unwrap();
        assert!(!entry.is_binary);
        assert_eq!(entry.content, "caf\u{FFFD}\n");
    }

    #[test]
    fn test_mode_captured() {
        let home = TempDir::new().unwrap();
        let file = home.path().join(".npmrc");
        fs::write(&file, "registry=https://example.test\n").unwrap();
        let mut perms = fs::metadata(&file).unwrap().permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&file, perms).unwrap();

        let entry = scan_one(&file, home.path()).unwrap();
        assert_eq!(entry.mode, 0o600);
    }

    #[test]
    fn test_contains_nul() {
        assert!(contains_nul(b"a\x00b"));
        assert!(!contains_nul(b"plain text"));
        assert!(!contains_nul(b""));
    }
}

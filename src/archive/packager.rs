//! tar.gz packaging
//!
//! Writes the manifest as the first entry of a gzip-compressed tar
//! container, followed (dotfile backups only) by one payload entry per
//! embeddable file at its home-relative path. The manifest-first ordering
//! is a contract for restore tooling, which must read `backup.json`
//! before seeking into payload bodies.
//!
//! Any entry failure is fatal: a partially written archive is never a
//! valid artifact. The archive is built in a `.partial` sibling and
//! renamed into place on success so no corrupt file is left behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Builder, Header};

use crate::error::{VaultError, VaultResult};
use crate::models::{DotfileManifest, KeyBackupManifest, MANIFEST_NAME};

/// Write a key backup archive: exactly one entry, the manifest.
pub fn write_key_archive(manifest: &KeyBackupManifest, dest: &Path) -> VaultResult<()> {
    let json = serde_json::to_vec_pretty(manifest)?;
    write_archive(dest, |builder| append_manifest(builder, &json))
}

/// Write a dotfile backup archive: manifest first, then payload bodies
/// in manifest-list order. Directories and binary files are metadata-only
/// and get no payload entry.
pub fn write_dotfile_archive(manifest: &DotfileManifest, dest: &Path) -> VaultResult<()> {
    let json = serde_json::to_vec_pretty(manifest)?;
    write_archive(dest, |builder| {
        append_manifest(builder, &json)?;

        for dotfile in manifest.files.iter().filter(|f| f.has_payload()) {
            let mut file = File::open(&dotfile.path).map_err(|e| {
                VaultError::Archive(format!("Failed to open payload {}: {}", dotfile.path, e))
            })?;
            let size = file
                .metadata()
                .map_err(|e| VaultError::Archive(e.to_string()))?
                .len();

            let mut header = Header::new_gnu();
            header.set_size(size);
            header.set_mode(dotfile.mode);
            header.set_cksum();

            builder
                .append_data(&mut header, &dotfile.rel_path, &mut file)
                .map_err(|e| {
                    VaultError::Archive(format!(
                        "Failed to write payload {}: {}",
                        dotfile.rel_path, e
                    ))
                })?;
        }

        Ok(())
    })
}

fn append_manifest(builder: &mut Builder<GzEncoder<File>>, json: &[u8]) -> VaultResult<()> {
    let mut header = Header::new_gnu();
    header.set_size(json.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();

    builder
        .append_data(&mut header, MANIFEST_NAME, json)
        .map_err(|e| VaultError::Archive(format!("Failed to write manifest entry: {}", e)))
}

/// Build the archive in a `.partial` sibling, rename into place on
/// success, remove the sibling on failure.
fn write_archive<F>(dest: &Path, fill: F) -> VaultResult<()>
where
    F: FnOnce(&mut Builder<GzEncoder<File>>) -> VaultResult<()>,
{
    let partial = partial_path(dest);

    let result = (|| {
        let file = File::create(&partial)
            .map_err(|e| VaultError::Archive(format!("Failed to create archive: {}", e)))?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = Builder::new(encoder);

        fill(&mut builder)?;

        let encoder = builder
            .into_inner()
            .map_err(|e| VaultError::Archive(format!("Failed to finish tar stream: {}", e)))?;
        encoder
            .finish()
            .map_err(|e| VaultError::Archive(format!("Failed to finish gzip stream: {}", e)))?;
        Ok(())
    })();

    match result {
        Ok(()) => std::fs::rename(&partial, dest)
            .map_err(|e| VaultError::Archive(format!("Failed to finalize archive: {}", e))),
        Err(err) => {
            let _ = std::fs::remove_file(&partial);
            Err(err)
        }
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    name.push_str(".partial");
    dest.with_file_name(name)
}

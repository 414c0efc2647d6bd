//! Discovery layer
//!
//! Scans the filesystem for credential material and well-known dotfiles.
//! All per-path failures here are local: a location that cannot be walked
//! or a file that cannot be read is warned about and skipped, never fatal
//! to the run.

pub mod classify;
pub mod dotfiles;
pub mod locations;

pub use classify::{is_credential_file, key_type_for};
pub use dotfiles::scan_dotfiles;
pub use locations::{scan_custom_paths, scan_standard_locations};

//! Configuration for dotvault
//!
//! Holds the static location tables and path resolution helpers. The
//! well-known locations are immutable module constants rather than
//! runtime configuration; scanners take them as defaults and accept
//! overrides for testing.

pub mod paths;

pub use paths::{expand_home, VaultPaths, DOTFILE_PATHS, STANDARD_KEY_LOCATIONS};

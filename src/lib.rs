//! dotvault - Terminal-based credential and dotfile backup tool
//!
//! This library implements the backup engine behind the `dotvault`
//! binary: discovery of SSH/GPG key material and well-known dotfiles,
//! per-file authenticated encryption under a per-run session key, and
//! packaging of ciphertext plus a structured manifest into a compressed
//! tar archive.
//!
//! # Architecture
//!
//! - `config`: location tables and path resolution
//! - `error`: custom error types
//! - `models`: locations, dotfiles, encrypted records, manifests
//! - `scanner`: filesystem discovery and classification
//! - `crypto`: session keys and AES-256-GCM file encryption
//! - `archive`: tar.gz packaging
//! - `backup`: per-run orchestration
//! - `replicate`: distro detection and package replication
//! - `cli`: command handlers and the interactive menu
//!
//! Data flows one direction: discovery -> classification -> encryption ->
//! serialization -> container write. Nothing reads back what a later
//! stage produced; there is no restore path.

pub mod archive;
pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod replicate;
pub mod scanner;

pub use error::{VaultError, VaultResult};

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the backup and replication layers.

pub mod backup;
pub mod menu;
pub mod replicate;

pub use backup::{handle_dotfile_backup, handle_key_backup};
pub use menu::run_menu;
pub use replicate::handle_replicate;

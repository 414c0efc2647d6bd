//! Backup CLI commands
//!
//! User-facing wrappers around the backup orchestrators: progress output,
//! the interactive custom-path prompt, and outcome reporting.

use std::io::{self, BufRead, Write};

use crate::backup::{BackupOutcome, DotfileBackupManager, KeyBackupManager};
use crate::config::paths::VaultPaths;
use crate::error::VaultResult;

/// Handle the key backup command
pub fn handle_key_backup(mut custom_paths: Vec<String>, prompt: bool) -> VaultResult<()> {
    println!("=== Key Backup ===");

    if prompt {
        custom_paths.extend(prompt_custom_paths()?);
    }

    println!("Searching standard key locations...");
    let manager = KeyBackupManager::new(VaultPaths::new());
    let outcome = manager.run(&custom_paths)?;
    report(&outcome, "key files");
    Ok(())
}

/// Handle the dotfile backup command
pub fn handle_dotfile_backup() -> VaultResult<()> {
    println!("=== Dotfile Backup ===");

    let manager = DotfileBackupManager::new(VaultPaths::new());
    let outcome = manager.run()?;
    report(&outcome, "dotfiles");
    Ok(())
}

fn report(outcome: &BackupOutcome, unit: &str) {
    match outcome {
        BackupOutcome::Archived {
            archive,
            records,
            skipped,
        } => {
            println!("Backup completed successfully: {}", archive.display());
            println!("Backed up {} {}", records, unit);
            for skip in skipped {
                println!("Skipped {}: {}", skip.path.display(), skip.reason);
            }
        }
        BackupOutcome::NothingToBackUp => {
            println!("Nothing to back up.");
        }
    }
}

/// Prompt for additional key locations, one per line, empty line to
/// finish.
fn prompt_custom_paths() -> VaultResult<Vec<String>> {
    println!();
    println!("Enter additional key locations (one per line, empty line to finish):");
    println!("Examples: ~/mykeys/, /opt/certificates/, ~/.config/app/keys");

    let stdin = io::stdin();
    let mut paths = Vec::new();

    loop {
        print!("Path: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let path = input.trim();
        if path.is_empty() {
            break;
        }
        paths.push(path.to_string());
    }

    Ok(paths)
}

//! Interactive menu
//!
//! The numbered text menu shown when dotvault is started without a
//! subcommand. Each choice dispatches to the matching command handler;
//! handler failures are reported and return to the menu.

use std::io::{self, BufRead, Write};

use crate::error::VaultResult;

use super::{handle_dotfile_backup, handle_key_backup, handle_replicate};

/// Run the interactive menu loop until the user exits
pub fn run_menu() -> VaultResult<()> {
    let stdin = io::stdin();

    loop {
        println!();
        println!("=== dotvault ===");
        println!("1. Generate package replication files");
        println!("2. Backup SSH/GPG keys");
        println!("3. Backup dotfiles");
        println!("4. Exit");
        print!("Choose an option (1-4): ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }

        match input.trim() {
            "1" => {
                if let Err(err) = handle_replicate() {
                    eprintln!("Replication failed: {}", err);
                }
            }
            "2" => {
                if let Err(err) = handle_key_backup(Vec::new(), true) {
                    eprintln!("Backup failed: {}", err);
                }
            }
            "3" => {
                if let Err(err) = handle_dotfile_backup() {
                    eprintln!("Backup failed: {}", err);
                }
            }
            "4" => return Ok(()),
            _ => println!("Invalid choice. Please select 1-4."),
        }
    }
}

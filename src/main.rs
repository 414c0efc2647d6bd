use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dotvault::cli::{handle_dotfile_backup, handle_key_backup, handle_replicate, run_menu};
use dotvault::VaultError;

#[derive(Parser)]
#[command(
    name = "dotvault",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based credential and dotfile backup tool for Linux",
    long_about = "dotvault backs up SSH/GPG key material and well-known dotfiles \
                  into portable, integrity-checked tar.gz archives. Credential \
                  files are encrypted per-file with AES-256-GCM under a session \
                  key generated for each run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up SSH/GPG keys into an encrypted archive
    Keys {
        /// Additional key locations (files or directories), repeatable
        #[arg(short, long = "path")]
        paths: Vec<String>,

        /// Skip the interactive prompt for additional locations
        #[arg(long)]
        no_prompt: bool,
    },

    /// Back up well-known dotfiles
    Dotfiles,

    /// Generate package replication files for the current distro
    Replicate,

    /// Run the interactive menu (default when no subcommand is given)
    Menu,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if std::env::consts::OS != "linux" {
        return Err(VaultError::UnsupportedPlatform(format!(
            "{}; dotvault is Linux-only",
            std::env::consts::OS
        ))
        .into());
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Keys { paths, no_prompt }) => {
            handle_key_backup(paths, !no_prompt)?;
        }
        Some(Commands::Dotfiles) => {
            handle_dotfile_backup()?;
        }
        Some(Commands::Replicate) => {
            handle_replicate()?;
        }
        Some(Commands::Menu) | None => {
            run_menu()?;
        }
    }

    Ok(())
}

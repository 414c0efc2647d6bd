//! Installed-package enumeration
//!
//! Shells out to the native package manager for the detected base distro
//! and, where available, flatpak and snap. The payload shape is decided
//! once at construction: Arch systems split official and AUR packages,
//! everything else carries a flat list.

use std::process::Command;

use serde::Serialize;
use tracing::warn;

use crate::error::{VaultError, VaultResult};

/// Everything enumerated on the system, by source
#[derive(Debug, Clone, Default)]
pub struct PackageInventory {
    pub official: Vec<String>,
    pub aur: Vec<String>,
    pub flatpak: Vec<String>,
    pub snap: Vec<String>,
}

/// Native-package payload of the system report, fixed at construction
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PackageSet {
    /// Arch: official repositories and AUR listed separately
    Split {
        #[serde(rename = "official_packages")]
        official: Vec<String>,
        #[serde(rename = "aur_packages")]
        aur: Vec<String>,
    },
    /// Everything else: one flat list
    Flat(Vec<String>),
}

/// The `package_info.json` document.
///
/// Flatpak and snap lists ride alongside the native payload so a consumer
/// on another machine sees every source, not just what the script used.
#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub os: String,
    pub distro: String,
    pub base_distro: String,
    pub packages: PackageSet,
    #[serde(rename = "flatpak_packages")]
    pub flatpak: Vec<String>,
    #[serde(rename = "snap_packages")]
    pub snap: Vec<String>,
}

impl SystemReport {
    pub fn new(distro: &str, base_distro: &str, inventory: &PackageInventory) -> Self {
        let packages = if base_distro == "arch" {
            PackageSet::Split {
                official: inventory.official.clone(),
                aur: inventory.aur.clone(),
            }
        } else {
            PackageSet::Flat(inventory.official.clone())
        };

        Self {
            os: "linux".to_string(),
            distro: distro.to_string(),
            base_distro: base_distro.to_string(),
            packages,
            flatpak: inventory.flatpak.clone(),
            snap: inventory.snap.clone(),
        }
    }
}

/// Enumerate installed packages for the given base distro.
///
/// Fails only when no package manager is known for the base; individual
/// optional sources (AUR, flatpak, snap) degrade to empty lists.
pub fn fetch_inventory(base_distro: &str) -> VaultResult<PackageInventory> {
    let official = match base_distro {
        "debian" | "ubuntu" => run_listing("dpkg", &["--get-selections"])?,
        "arch" => run_listing("pacman", &["-Qn"])?,
        "rhel" | "fedora" => run_listing("rpm", &["-qa"])?,
        "void" => run_listing("xbps-query", &["-l"])?,
        other => {
            return Err(VaultError::Replicate(format!(
                "No known package manager for base distro '{}'",
                other
            )))
        }
    };

    let aur = if base_distro == "arch" {
        run_listing("pacman", &["-Qm"]).unwrap_or_else(|err| {
            warn!(%err, "failed to list AUR packages");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    Ok(PackageInventory {
        official,
        aur,
        flatpak: optional_listing("flatpak", &["list", "--app", "--columns=application"]),
        snap: optional_listing("snap", &["list"]),
    })
}

/// Run a package listing command and return one package name per line.
fn run_listing(program: &str, args: &[&str]) -> VaultResult<Vec<String>> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| VaultError::Replicate(format!("Failed to run {}: {}", program, e)))?;

    if !output.status.success() {
        return Err(VaultError::Replicate(format!(
            "{} exited with {}",
            program, output.status
        )));
    }

    Ok(parse_listing(&String::from_utf8_lossy(&output.stdout)))
}

/// Listing from a source that may simply not be installed.
fn optional_listing(program: &str, args: &[&str]) -> Vec<String> {
    run_listing(program, args).unwrap_or_default()
}

/// One package per line; the name is the first whitespace-separated
/// column (dpkg appends a state, pacman a version, snap a header row we
/// cannot cheaply distinguish from data and tolerate in the script).
fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

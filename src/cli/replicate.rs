//! Package replication CLI command
//!
//! Detects the distro, enumerates installed packages, and writes the
//! system report plus an install script under `outputs/`.

use std::path::Path;

use crate::error::{VaultError, VaultResult};
use crate::replicate::{detect_distro, fetch_inventory, generate_install_script, SystemReport};

const REPORT_DIR: &str = "outputs/sys";
const REPORT_PATH: &str = "outputs/sys/package_info.json";
const SCRIPT_DIR: &str = "outputs/scripts";
const SCRIPT_PATH: &str = "outputs/scripts/setup.sh";

/// Handle the replicate command
pub fn handle_replicate() -> VaultResult<()> {
    let (distro, base_distro) = detect_distro();
    if distro == "unknown" && base_distro == "unknown" {
        return Err(VaultError::Replicate(
            "Failed to detect the running distribution".into(),
        ));
    }

    println!("Distribution: {}", distro);
    println!("Built on: {}", base_distro);

    let inventory = fetch_inventory(&base_distro)?;
    println!(
        "Found {} official packages",
        inventory.official.len()
    );

    let report = SystemReport::new(&distro, &base_distro, &inventory);
    let json = serde_json::to_vec_pretty(&report)?;

    std::fs::create_dir_all(REPORT_DIR)?;
    std::fs::write(REPORT_PATH, json)?;
    println!("System report written to {}", REPORT_PATH);

    std::fs::create_dir_all(SCRIPT_DIR)?;
    generate_install_script(&base_distro, &inventory, Path::new(SCRIPT_PATH))?;
    println!("Install script written to {}", SCRIPT_PATH);

    Ok(())
}

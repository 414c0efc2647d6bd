//! Install-script generation
//!
//! Emits a bash script that reinstalls the enumerated packages on a
//! fresh system: official packages with the distro's package manager,
//! then AUR, flatpak, and snap sections when those lists are non-empty.
//! Every install line carries `|| true` so one vanished package does not
//! abort the whole replication.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{VaultError, VaultResult};

use super::PackageInventory;

/// Generate the install script at `dest`.
pub fn generate_install_script(
    base_distro: &str,
    inventory: &PackageInventory,
    dest: &Path,
) -> VaultResult<()> {
    let script = render_script(base_distro, inventory)?;
    std::fs::write(dest, script)
        .map_err(|e| VaultError::Io(format!("Failed to write install script: {}", e)))?;
    Ok(())
}

fn install_command(base_distro: &str) -> Option<&'static str> {
    match base_distro {
        "debian" | "ubuntu" => Some("sudo apt-get install -y"),
        "arch" => Some("sudo pacman -S --noconfirm"),
        "rhel" | "fedora" => Some("sudo dnf install -y"),
        "void" => Some("sudo xbps-install -y"),
        _ => None,
    }
}

fn render_script(base_distro: &str, inventory: &PackageInventory) -> VaultResult<String> {
    let mut script = String::new();
    script.push_str("#!/bin/bash\nset -e\necho 'Starting package installation...'\n");

    let Some(install) = install_command(base_distro) else {
        return Err(VaultError::Replicate(format!(
            "No install command known for base distro '{}'",
            base_distro
        )));
    };

    if !inventory.official.is_empty() {
        let _ = writeln!(script, "echo 'Installing packages with {}...'", install);
        for pkg in inventory.official.iter().filter(|p| !p.is_empty()) {
            let _ = writeln!(script, "{} {} || true", install, pkg);
        }
    }

    if !inventory.aur.is_empty() {
        script.push_str(
            "if ! command -v yay >/dev/null; then\n  echo 'yay not found, installing yay...'\n  sudo pacman -S --noconfirm yay\nfi\n",
        );
        script.push_str("echo 'Installing AUR packages with yay...'\n");
        for pkg in inventory.aur.iter().filter(|p| !p.is_empty()) {
            let _ = writeln!(script, "yay -S --noconfirm {} || true", pkg);
        }
    }

    if !inventory.flatpak.is_empty() {
        let _ = writeln!(
            script,
            "if ! command -v flatpak >/dev/null; then\n  echo 'flatpak not found, installing flatpak...'\n  {} flatpak\nfi",
            install
        );
        script.push_str("echo 'Installing Flatpak packages...'\n");
        for pkg in inventory.flatpak.iter().filter(|p| !p.is_empty()) {
            let _ = writeln!(script, "sudo flatpak install --noninteractive {} || true", pkg);
        }
    }

    if !inventory.snap.is_empty() {
        let _ = writeln!(
            script,
            "if ! command -v snap >/dev/null; then\n  echo 'snap not found, installing snapd...'\n  {} snapd\n  sudo systemctl enable --now snapd.socket\nfi",
            install
        );
        script.push_str("echo 'Installing Snap packages...'\n");
        for pkg in inventory.snap.iter().filter(|p| !p.is_empty()) {
            let _ = writeln!(script, "sudo snap install {} || true", pkg);
        }
    }

    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_header_and_install_lines() {
        let inventory = PackageInventory {
            official: vec!["bash".into(), "vim".into()],
            ..Default::default()
        };
        let script = render_script("debian", &inventory).unwrap();

        assert!(script.starts_with("#!/bin/bash\nset -e\n"));
        assert!(script.contains("sudo apt-get install -y bash || true"));
        assert!(script.contains("sudo apt-get install -y vim || true"));
        assert!(!script.contains("yay"));
    }

    #[test]
    fn test_arch_script_includes_aur_bootstrap() {
        let inventory = PackageInventory {
            official: vec!["linux".into()],
            aur: vec!["spotify".into()],
            ..Default::default()
        };
        let script = render_script("arch", &inventory).unwrap();

        assert!(script.contains("sudo pacman -S --noconfirm linux || true"));
        assert!(script.contains("command -v yay"));
        assert!(script.contains("yay -S --noconfirm spotify || true"));
    }

    #[test]
    fn test_flatpak_and_snap_sections() {
        let inventory = PackageInventory {
            official: vec!["bash".into()],
            flatpak: vec!["org.gimp.GIMP".into()],
            snap: vec!["firefox".into()],
            ..Default::default()
        };
        let script = render_script("fedora", &inventory).unwrap();

        assert!(script.contains("sudo flatpak install --noninteractive org.gimp.GIMP || true"));
        assert!(script.contains("sudo snap install firefox || true"));
        assert!(script.contains("sudo dnf install -y flatpak"));
    }

    #[test]
    fn test_unsupported_base_is_error() {
        let err = render_script("gentoo", &PackageInventory::default()).unwrap_err();
        assert!(matches!(err, VaultError::Replicate(_)));
    }

    #[test]
    fn test_script_written_to_disk() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("setup.sh");
        let inventory = PackageInventory {
            official: vec!["bash".into()],
            ..Default::default()
        };

        generate_install_script("void", &inventory, &dest).unwrap();
        let written = std::fs::read_to_string(&dest).unwrap();
        assert!(written.contains("sudo xbps-install -y bash || true"));
    }
}

//! Distro detection
//!
//! Reads `/etc/os-release` and extracts `ID` and `ID_LIKE`. When
//! `ID_LIKE` is absent (Arch, Debian itself) the distro id doubles as the
//! base id, since it is the base the package-manager dispatch keys on.

const OS_RELEASE: &str = "/etc/os-release";

/// Detect `(distro, base_distro)` for the running system.
///
/// Returns `("unknown", "unknown")` when `/etc/os-release` is unreadable.
pub fn detect_distro() -> (String, String) {
    match std::fs::read_to_string(OS_RELEASE) {
        Ok(content) => parse_os_release(&content),
        Err(_) => ("unknown".to_string(), "unknown".to_string()),
    }
}

fn parse_os_release(content: &str) -> (String, String) {
    let mut distro = String::new();
    let mut base = String::new();

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("ID=") {
            distro = trim_value(value);
        } else if let Some(value) = line.strip_prefix("ID_LIKE=") {
            // ID_LIKE may list several ancestors ("ubuntu debian");
            // the first is the closest base
            base = trim_value(value)
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
        }
    }

    if distro.is_empty() {
        distro = "unknown".to_string();
    }
    if base.is_empty() {
        base = distro.clone();
    }

    (distro, base)
}

fn trim_value(value: &str) -> String {
    value.trim().trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_id_like() {
        let content = "NAME=\"Linux Mint\"\nID=linuxmint\nID_LIKE=\"ubuntu debian\"\n";
        assert_eq!(
            parse_os_release(content),
            ("linuxmint".to_string(), "ubuntu".to_string())
        );
    }

    #[test]
    fn test_parse_without_id_like_falls_back_to_id() {
        let content = "NAME=\"Arch Linux\"\nID=arch\nBUILD_ID=rolling\n";
        assert_eq!(
            parse_os_release(content),
            ("arch".to_string(), "arch".to_string())
        );
    }

    #[test]
    fn test_parse_quoted_id() {
        let content = "ID=\"fedora\"\n";
        assert_eq!(
            parse_os_release(content),
            ("fedora".to_string(), "fedora".to_string())
        );
    }

    #[test]
    fn test_parse_empty_content() {
        assert_eq!(
            parse_os_release(""),
            ("unknown".to_string(), "unknown".to_string())
        );
    }
}

//! Credential file classification
//!
//! Pattern matching over parsing: credential file formats vary too much
//! to parse generically, and the type tag only routes later encryption,
//! it never validates content.

use std::path::Path;

use crate::models::KeyType;

/// SSH file name patterns (substring match)
const SSH_PATTERNS: &[&str] = &[
    "id_rsa",
    "id_dsa",
    "id_ecdsa",
    "id_ed25519",
    "authorized_keys",
    "known_hosts",
    "config",
];

/// GPG file name patterns (substring match)
const GPG_PATTERNS: &[&str] = &[
    "pubring.gpg",
    "secring.gpg",
    "trustdb.gpg",
    "gpg.conf",
    "gpg-agent.conf",
];

/// Generic key file suffixes
const KEY_SUFFIXES: &[&str] = &[".pub", ".pem", ".key"];

/// Decide whether a file name looks like a credential artifact
pub fn is_credential_file(name: &str) -> bool {
    if SSH_PATTERNS.iter().any(|p| name.contains(p)) {
        return true;
    }
    if GPG_PATTERNS.iter().any(|p| name.contains(p)) {
        return true;
    }
    KEY_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Infer the key type of a location from its path
pub fn key_type_for(path: &Path) -> KeyType {
    let path = path.to_string_lossy();
    if path.contains(".ssh") {
        KeyType::Ssh
    } else if path.contains(".gnupg") {
        KeyType::Gpg
    } else {
        KeyType::Custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssh_patterns_match() {
        for name in [
            "id_rsa",
            "id_rsa.pub",
            "id_dsa",
            "id_ecdsa",
            "id_ed25519",
            "authorized_keys",
            "known_hosts",
            "config",
        ] {
            assert!(is_credential_file(name), "{} should match", name);
        }
    }

    #[test]
    fn test_gpg_patterns_match() {
        for name in [
            "pubring.gpg",
            "secring.gpg",
            "trustdb.gpg",
            "gpg.conf",
            "gpg-agent.conf",
        ] {
            assert!(is_credential_file(name), "{} should match", name);
        }
    }

    #[test]
    fn test_key_suffixes_match() {
        assert!(is_credential_file("cert.pem"));
        assert!(is_credential_file("server.key"));
        assert!(is_credential_file("deploy.pub"));
    }

    #[test]
    fn test_ordinary_files_do_not_match() {
        for name in ["notes.txt", "README.md", "photo.jpg", "publisher.json"] {
            assert!(!is_credential_file(name), "{} should not match", name);
        }
    }

    #[test]
    fn test_key_type_from_path() {
        assert_eq!(key_type_for(Path::new("/home/u/.ssh")), KeyType::Ssh);
        assert_eq!(key_type_for(Path::new("/home/u/.gnupg")), KeyType::Gpg);
        assert_eq!(key_type_for(Path::new("/opt/certs")), KeyType::Custom);
    }
}

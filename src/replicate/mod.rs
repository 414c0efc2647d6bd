//! Package replication
//!
//! Distro detection, installed-package enumeration, and install-script
//! generation. This is boundary glue around native package managers; it
//! neither calls into nor is called by the backup engine.

pub mod distro;
pub mod packages;
pub mod script;

pub use distro::detect_distro;
pub use packages::{fetch_inventory, PackageInventory, PackageSet, SystemReport};
pub use script::generate_install_script;

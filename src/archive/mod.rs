//! Archive packaging
//!
//! Produces the final `.tar.gz` artifacts.

pub mod packager;

pub use packager::{write_dotfile_archive, write_key_archive};

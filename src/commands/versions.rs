//! Supported game-version listing

use crate::workspace::record::SUPPORTED_VERSIONS;
use colored::Colorize;

/// Print the supported game versions, newest first
pub fn handle_versions() {
    println!("{}", "Supported game versions:".bold());
    for version in SUPPORTED_VERSIONS {
        println!("  {}", version);
    }
}

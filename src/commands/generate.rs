//! One-shot mod generation command

use crate::config::Config;
use crate::error::{ModforgeError, Result};
use crate::export;
use crate::service::http::HttpModService;
use crate::workspace::record::Loader;
use crate::workspace::Workspace;
use colored::Colorize;
use std::path::Path;

/// Generate a mod from a description and export it into `out`
///
/// # Errors
///
/// Returns an error for invalid inputs, a service failure, or an export
/// failure
pub async fn handle_generate(
    config: &Config,
    description: &str,
    loader: Option<&str>,
    version: Option<&str>,
    out: &Path,
) -> Result<()> {
    let loader = loader
        .map(Loader::parse_str)
        .transpose()
        .map_err(ModforgeError::Validation)?;

    let service = HttpModService::new(config.service.clone())?;
    let mut workspace = Workspace::new(Box::new(service), &config.workspace)?;

    println!("Generating mod...");
    let id = workspace.generate(description, loader, version).await?;
    let record = workspace
        .record(&id)
        .ok_or_else(|| ModforgeError::NotFound(format!("mod {}", id)))?;

    println!(
        "{} {} for {} {}",
        "Created".green(),
        record.name.bold(),
        record.loader.display_name(),
        record.version
    );

    let path = export::write_archive(record, out)?;
    println!("{} {}", "Exported to".green(), path.display());
    Ok(())
}

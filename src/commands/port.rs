//! One-shot jar porting command

use crate::config::Config;
use crate::error::{ModforgeError, Result};
use crate::export;
use crate::service::http::HttpModService;
use crate::workspace::record::Loader;
use crate::workspace::Workspace;
use colored::Colorize;
use std::path::Path;

/// Port a jar to a loader/version target and export the result into `out`
///
/// # Errors
///
/// Returns an error for a non-jar path, invalid inputs, a service
/// failure, or an export failure
pub async fn handle_port(
    config: &Config,
    jar: &Path,
    loader: Option<&str>,
    target_version: Option<&str>,
    out: &Path,
) -> Result<()> {
    let loader = loader
        .map(Loader::parse_str)
        .transpose()
        .map_err(ModforgeError::Validation)?;

    let service = HttpModService::new(config.service.clone())?;
    let mut workspace = Workspace::new(Box::new(service), &config.workspace)?;

    println!("Porting {}...", jar.display());
    let id = workspace.port(jar, loader, target_version).await?;
    let record = workspace
        .record(&id)
        .ok_or_else(|| ModforgeError::NotFound(format!("mod {}", id)))?;

    println!(
        "{} {} to {} {}",
        "Ported".green(),
        record.name.bold(),
        record.loader.display_name(),
        record.version
    );
    println!("  {}", record.description);

    let path = export::write_archive(record, out)?;
    println!("{} {}", "Exported to".green(), path.display());
    Ok(())
}

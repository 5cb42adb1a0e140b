//! Zip export of a mod record
//!
//! Assembles a buildable Gradle project layout from a record's content bag
//! and writes it as a deflate-compressed zip archive. Every file is built
//! from state already in the record; nothing is fetched.

use crate::error::{ModforgeError, Result};
use crate::workspace::record::{ModFile, ModRecord};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Wrapper script shipped so the exported project builds without a local
/// Gradle install step documented separately
const GRADLEW_SH: &str = "#!/bin/sh\n# Gradle wrapper shim. Requires a local Gradle installation.\nexec gradle \"$@\"\n";

const GRADLEW_BAT: &str =
    "@echo off\r\nrem Gradle wrapper shim. Requires a local Gradle installation.\r\ngradle %*\r\n";

/// Fallback main-class body used when the service produced none
const DEFAULT_MAIN_CLASS: &str =
    "public class Main {\n    // Generated mod entry point\n}\n";

/// Fallback build script used when the service produced none
const DEFAULT_BUILD_GRADLE: &str = "plugins {\n    id 'java'\n}\n";

/// Archive file name for a record: whitespace runs become underscores
pub fn archive_file_name(name: &str) -> String {
    let base: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let base = if base.is_empty() { "mod".to_string() } else { base };
    format!("{}_mod.zip", base)
}

/// Java package segment for a record name: lowercased, whitespace removed
fn package_segment(name: &str) -> String {
    let segment: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if segment.is_empty() {
        "mod".to_string()
    } else {
        segment
    }
}

/// README body embedded in every export
fn readme(record: &ModRecord) -> String {
    format!(
        "# {}\n\n{}\n\nLoader: {}\nMinecraft Version: {}\n\n## Building\n\n1. Install JDK 17+\n2. Run: ./gradlew build\n3. The finished mod is in build/libs/\n",
        record.name,
        record.description,
        record.loader.display_name(),
        record.version
    )
}

/// Assemble the full set of files for a record's export
///
/// Returns an error when the record has no content yet. When two entries
/// map to the same archive path, the first occupant wins and later
/// duplicates are skipped with a warning.
pub fn assemble_files(record: &ModRecord) -> Result<Vec<ModFile>> {
    let content = record.content.as_ref().ok_or_else(|| {
        ModforgeError::NotFound(format!("mod {} has no content to export", record.id))
    })?;

    let main_path = format!(
        "src/main/java/com/example/{}/Main.java",
        package_segment(&record.name)
    );

    let mut entries: Vec<ModFile> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |entries: &mut Vec<ModFile>, path: String, body: String| {
        if seen.insert(path.clone()) {
            entries.push(ModFile { path, content: body });
        } else {
            tracing::warn!("skipping duplicate export path: {}", path);
        }
    };

    push(
        &mut entries,
        main_path,
        content
            .main_class
            .clone()
            .unwrap_or_else(|| DEFAULT_MAIN_CLASS.to_string()),
    );
    push(
        &mut entries,
        "build.gradle".to_string(),
        content
            .build_gradle
            .clone()
            .unwrap_or_else(|| DEFAULT_BUILD_GRADLE.to_string()),
    );
    for file in &content.files {
        push(&mut entries, file.path.clone(), file.content.clone());
    }
    push(&mut entries, "README.md".to_string(), readme(record));
    push(&mut entries, "gradlew".to_string(), GRADLEW_SH.to_string());
    push(&mut entries, "gradlew.bat".to_string(), GRADLEW_BAT.to_string());

    Ok(entries)
}

/// Write the record's export archive into `out_dir`
///
/// Returns the path of the written archive.
///
/// # Errors
///
/// Returns an error when the record has no content, or on any filesystem
/// or archive failure
pub fn write_archive(record: &ModRecord, out_dir: &Path) -> Result<PathBuf> {
    let entries = assemble_files(record)?;
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(archive_file_name(&record.name));

    let file = File::create(&out_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in &entries {
        writer.start_file(&entry.path, options)?;
        writer.write_all(entry.content.as_bytes())?;
    }
    writer.finish()?;

    tracing::info!(
        "exported {} ({} files) to {}",
        record.name,
        entries.len(),
        out_path.display()
    );
    Ok(out_path)
}

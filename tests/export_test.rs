//! Integration tests for zip export

use modforge::export::{archive_file_name, write_archive};
use modforge::workspace::record::{Loader, ModContent, ModFile, ModRecord};
use std::io::Read;
use zip::ZipArchive;

fn record(name: &str, content: ModContent) -> ModRecord {
    let content = ModContent {
        mod_name: Some(name.to_string()),
        ..content
    };
    ModRecord::from_generation("m1", "an emerald sword", Loader::Forge, "1.20.1", content)
}

fn read_entry(archive: &mut ZipArchive<std::fs::File>, path: &str) -> String {
    let mut entry = archive.by_name(path).expect(path);
    let mut body = String::new();
    entry.read_to_string(&mut body).unwrap();
    body
}

#[test]
fn exported_archive_contains_full_project_layout() {
    let dir = tempfile::tempdir().unwrap();
    let record = record(
        "Emerald Sword Mod",
        ModContent {
            main_class: Some("public class Main {}".to_string()),
            build_gradle: Some("plugins { id 'java' }".to_string()),
            files: vec![ModFile {
                path: "src/main/resources/assets/lang/en_us.json".to_string(),
                content: "{}".to_string(),
            }],
            ..Default::default()
        },
    );

    let path = write_archive(&record, dir.path()).expect("export");
    assert_eq!(path, dir.path().join("Emerald_Sword_Mod_mod.zip"));

    let mut archive = ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(
        read_entry(&mut archive, "src/main/java/com/example/emeraldswordmod/Main.java"),
        "public class Main {}"
    );
    assert_eq!(read_entry(&mut archive, "build.gradle"), "plugins { id 'java' }");
    assert_eq!(
        read_entry(&mut archive, "src/main/resources/assets/lang/en_us.json"),
        "{}"
    );
    assert!(archive.by_name("gradlew").is_ok());
    assert!(archive.by_name("gradlew.bat").is_ok());
}

#[test]
fn readme_carries_name_loader_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let record = record("Emerald Sword Mod", ModContent::default());

    let path = write_archive(&record, dir.path()).expect("export");
    let mut archive = ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
    let readme = read_entry(&mut archive, "README.md");

    assert!(readme.contains("# Emerald Sword Mod\n"));
    assert!(readme.contains("an emerald sword"));
    assert!(readme.contains("Loader: Forge\n"));
    assert!(readme.contains("Minecraft Version: 1.20.1\n"));
    assert!(readme.contains("## Building"));
}

#[test]
fn export_without_content_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = record("Empty", ModContent::default());
    record.content = None;

    assert!(write_archive(&record, dir.path()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn duplicate_paths_keep_the_first_entry() {
    let dir = tempfile::tempdir().unwrap();
    let record = record(
        "Collide",
        ModContent {
            build_gradle: Some("plugins { id 'forge' }".to_string()),
            files: vec![ModFile {
                path: "build.gradle".to_string(),
                content: "// shadowed duplicate".to_string(),
            }],
            ..Default::default()
        },
    );

    let path = write_archive(&record, dir.path()).expect("export");
    let mut archive = ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(read_entry(&mut archive, "build.gradle"), "plugins { id 'forge' }");
}

#[test]
fn export_creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/out");
    let record = record("Lamp", ModContent::default());

    let path = write_archive(&record, &out).expect("export");
    assert!(path.exists());
}

#[test]
fn archive_name_handles_whitespace_runs() {
    assert_eq!(archive_file_name("My  Cool   Mod"), "My_Cool_Mod_mod.zip");
}

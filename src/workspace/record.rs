//! Mod record types
//!
//! A [`ModRecord`] describes one generated or ported mod artifact tracked
//! by the workspace for the lifetime of the session. Its `content` bag is
//! shaped entirely by the external mod services and is treated as opaque:
//! every field may be absent and every consumption site handles absence
//! explicitly.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game versions the mod services accept, newest first.
pub const SUPPORTED_VERSIONS: [&str; 17] = [
    "1.21.7", "1.21.1", "1.21", "1.20.6", "1.20.4", "1.20.1", "1.19.4", "1.19.2", "1.18.2",
    "1.17.1", "1.16.5", "1.15.2", "1.14.4", "1.12.2", "1.10.2", "1.8.9", "1.7.10",
];

/// Display names are truncated to this many characters when the service
/// does not report a mod name.
pub const NAME_TRUNCATE_CHARS: usize = 30;

/// Returns true when `version` is in the supported game-version list.
pub fn is_supported_version(version: &str) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}

/// Target mod-loading framework
///
/// Serializes to the lowercase wire names (`forge` / `fabric`) used by the
/// mod services; [`Loader::display_name`] gives the capitalized form shown
/// to users and embedded in exported READMEs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Forge,
    Fabric,
}

impl Loader {
    /// Parse a loader from a string (case-insensitive)
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "forge" => Ok(Self::Forge),
            "fabric" => Ok(Self::Fabric),
            other => Err(format!("Unknown loader: {}", other)),
        }
    }

    /// Lowercase name used in request bodies
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Forge => "forge",
            Self::Fabric => "fabric",
        }
    }

    /// Capitalized name shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Forge => "Forge",
            Self::Fabric => "Fabric",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One generated file carried inside a mod's content bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModFile {
    pub path: String,
    pub content: String,
}

/// The open-ended bag of generated artifacts for one mod
///
/// The shape is dictated by the mod services (`modData` / `updatedCode` in
/// their responses). Unknown fields are ignored; every known field has a
/// default so partial bags deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModContent {
    /// Mod name reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_name: Option<String>,

    /// Main-class source body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_class: Option<String>,

    /// Build descriptor body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_gradle: Option<String>,

    /// Additional (path, content) pairs, exported verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ModFile>,

    /// Changes reported by the porting service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
}

/// Record lifecycle status
///
/// `Generating` is only observed transiently while a request is in flight;
/// records constructed from a service response are always `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Ready,
    Generating,
}

/// One generated or ported mod artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    /// Opaque identifier assigned by the external service
    pub id: String,
    /// Display name
    pub name: String,
    /// User-supplied description (generation) or change summary (porting)
    pub description: String,
    pub loader: Loader,
    pub version: String,
    /// Calendar date of creation (`YYYY-MM-DD`), set once
    pub created_date: String,
    pub status: RecordStatus,
    /// Generated artifacts; absent until the service has produced them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ModContent>,
}

impl ModRecord {
    /// Build a record from a successful generation response
    ///
    /// The display name comes from the service's `modName` when present,
    /// otherwise from the description truncated to
    /// [`NAME_TRUNCATE_CHARS`] characters.
    pub fn from_generation(
        id: impl Into<String>,
        description: &str,
        loader: Loader,
        version: &str,
        content: ModContent,
    ) -> Self {
        let name = content
            .mod_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| truncate_chars(description, NAME_TRUNCATE_CHARS));

        Self {
            id: id.into(),
            name,
            description: description.to_string(),
            loader,
            version: version.to_string(),
            created_date: today(),
            status: RecordStatus::Ready,
            content: Some(content),
        }
    }

    /// Build a record from a successful porting response
    ///
    /// The description summarizes the changes the service reported, joined
    /// into a single string; when the service reports none, a fallback
    /// phrase naming the target is used instead.
    pub fn from_port(id: impl Into<String>, loader: Loader, version: &str, content: ModContent) -> Self {
        let name = content
            .mod_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "PortedMod".to_string());

        let description = if content.changes.is_empty() {
            format!("Ported to {} {}", loader.display_name(), version)
        } else {
            content.changes.join("; ")
        };

        Self {
            id: id.into(),
            name,
            description,
            loader,
            version: version.to_string(),
            created_date: today(),
            status: RecordStatus::Ready,
            content: Some(content),
        }
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Truncate to at most `max` characters on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_parse() {
        assert_eq!(Loader::parse_str("forge").unwrap(), Loader::Forge);
        assert_eq!(Loader::parse_str("FABRIC").unwrap(), Loader::Fabric);
        assert!(Loader::parse_str("quilt").is_err());
    }

    #[test]
    fn test_loader_names() {
        assert_eq!(Loader::Forge.wire_name(), "forge");
        assert_eq!(Loader::Forge.display_name(), "Forge");
        assert_eq!(Loader::Fabric.to_string(), "Fabric");
    }

    #[test]
    fn test_loader_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Loader::Forge).unwrap(), "\"forge\"");
        assert_eq!(serde_json::to_string(&Loader::Fabric).unwrap(), "\"fabric\"");
    }

    #[test]
    fn test_supported_versions() {
        assert!(is_supported_version("1.20.1"));
        assert!(is_supported_version("1.7.10"));
        assert!(!is_supported_version("0.9"));
        assert_eq!(SUPPORTED_VERSIONS.len(), 17);
    }

    #[test]
    fn test_content_deserializes_partial_bag() {
        let content: ModContent = serde_json::from_str(r#"{"mainClass": "class Main {}"}"#).unwrap();
        assert_eq!(content.main_class.as_deref(), Some("class Main {}"));
        assert!(content.build_gradle.is_none());
        assert!(content.files.is_empty());
    }

    #[test]
    fn test_content_ignores_unknown_fields() {
        let content: ModContent =
            serde_json::from_str(r#"{"modName": "Sword", "textureNeeded": false}"#).unwrap();
        assert_eq!(content.mod_name.as_deref(), Some("Sword"));
    }

    #[test]
    fn test_from_generation_uses_service_name() {
        let content = ModContent {
            mod_name: Some("EmeraldSword".to_string()),
            ..Default::default()
        };
        let record = ModRecord::from_generation("m1", "an emerald sword", Loader::Forge, "1.20.1", content);
        assert_eq!(record.name, "EmeraldSword");
        assert_eq!(record.status, RecordStatus::Ready);
        assert_eq!(record.description, "an emerald sword");
    }

    #[test]
    fn test_from_generation_truncates_description_fallback() {
        let long = "a very long mod description that goes on and on";
        let record =
            ModRecord::from_generation("m1", long, Loader::Fabric, "1.19.2", ModContent::default());
        assert_eq!(record.name.chars().count(), NAME_TRUNCATE_CHARS);
        assert!(long.starts_with(&record.name));
    }

    #[test]
    fn test_from_port_joins_changes() {
        let content = ModContent {
            changes: vec!["updated imports".to_string(), "new registry".to_string()],
            ..Default::default()
        };
        let record = ModRecord::from_port("p1", Loader::Forge, "1.21", content);
        assert_eq!(record.description, "updated imports; new registry");
    }

    #[test]
    fn test_from_port_fallback_description() {
        let record = ModRecord::from_port("p1", Loader::Fabric, "1.21", ModContent::default());
        assert_eq!(record.description, "Ported to Fabric 1.21");
        assert_eq!(record.name, "PortedMod");
    }

    #[test]
    fn test_created_date_format() {
        let record =
            ModRecord::from_generation("m1", "x", Loader::Forge, "1.20.1", ModContent::default());
        // YYYY-MM-DD
        assert_eq!(record.created_date.len(), 10);
        assert_eq!(record.created_date.as_bytes()[4], b'-');
        assert_eq!(record.created_date.as_bytes()[7], b'-');
    }
}

//! Mod service trait and wire types
//!
//! This module defines the [`ModService`] trait the workspace drives, along
//! with the request and response bodies of the three external endpoints.
//! Field names follow the services' JSON contracts (camelCase) via serde
//! renames; response types tolerate and ignore fields the client does not
//! consume (`success`, `demoMode`, `sourceFiles`, ...).

use crate::error::Result;
use crate::workspace::record::{Loader, ModContent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of a generation request: `{description, loader, version}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub description: String,
    pub loader: Loader,
    pub version: String,
}

/// Successful generation response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Identifier the service assigned to the new mod
    pub mod_id: String,
    /// Generated artifact bundle
    pub mod_data: ModContent,
}

/// Body of a chat/revision request: `{modId, message, currentCode}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUpdateRequest {
    pub mod_id: String,
    pub message: String,
    /// The targeted record's current content; an empty bag when the record
    /// has none yet
    pub current_code: ModContent,
}

/// Successful chat/revision response
///
/// The service also reports a `changes` list; the workspace only consumes
/// the reply text and the replacement content, so it is ignored along
/// with the other unconsumed fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUpdateResponse {
    /// Assistant reply; a default acknowledgement is used when absent
    #[serde(default)]
    pub ai_message: Option<String>,
    /// Replacement content for the targeted record
    pub updated_code: ModContent,
}

/// Body of a porting request: `{jarBase64, targetVersion, loader}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRequest {
    pub jar_base64: String,
    pub target_version: String,
    pub loader: Loader,
}

/// Successful porting response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortResponse {
    /// Identifier the service assigned to the ported mod (distinct from
    /// any id of the source package)
    pub port_id: String,
    pub mod_data: ModContent,
}

/// The three external AI mod endpoints
///
/// The workspace only ever talks to the services through this trait, which
/// keeps the flows testable against doubles and mock servers.
#[async_trait]
pub trait ModService: Send + Sync {
    /// Generate a new mod from a free-text description
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;

    /// Revise an existing mod's content from a chat instruction
    async fn chat_update(&self, request: &ChatUpdateRequest) -> Result<ChatUpdateResponse>;

    /// Port an uploaded jar to a different loader/game-version target
    async fn port(&self, request: &PortRequest) -> Result<PortResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_wire_shape() {
        let request = GenerateRequest {
            description: "emerald sword".to_string(),
            loader: Loader::Forge,
            version: "1.20.1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["description"], "emerald sword");
        assert_eq!(json["loader"], "forge");
        assert_eq!(json["version"], "1.20.1");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatUpdateRequest {
            mod_id: "m1".to_string(),
            message: "add an enchantment".to_string(),
            current_code: ModContent::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["modId"], "m1");
        assert_eq!(json["message"], "add an enchantment");
        assert!(json["currentCode"].is_object());
    }

    #[test]
    fn test_port_request_wire_shape() {
        let request = PortRequest {
            jar_base64: "AAAA".to_string(),
            target_version: "1.21".to_string(),
            loader: Loader::Fabric,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jarBase64"], "AAAA");
        assert_eq!(json["targetVersion"], "1.21");
        assert_eq!(json["loader"], "fabric");
    }

    #[test]
    fn test_generate_response_tolerates_extra_fields() {
        let body = r#"{
            "success": true,
            "modId": "req-1",
            "modData": {"modName": "Sword", "textureNeeded": false},
            "loader": "forge",
            "version": "1.20.1",
            "demoMode": true
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.mod_id, "req-1");
        assert_eq!(response.mod_data.mod_name.as_deref(), Some("Sword"));
    }

    #[test]
    fn test_chat_response_defaults_and_tolerance() {
        let body = r#"{"updatedCode": {}, "changes": ["tweaked"], "success": true}"#;
        let response: ChatUpdateResponse = serde_json::from_str(body).unwrap();
        assert!(response.ai_message.is_none());
        assert!(response.updated_code.main_class.is_none());
    }
}

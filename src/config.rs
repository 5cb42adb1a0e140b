//! Configuration for Modforge
//!
//! Configuration is loaded from a YAML file, then overridden by
//! `MODFORGE_*` environment variables. Every key has a default, so a
//! missing file or an empty file yields a fully working configuration.

use crate::error::{ModforgeError, Result};
use crate::workspace::record::{is_supported_version, Loader};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// External mod service endpoints
    #[serde(default)]
    pub service: ServiceConfig,

    /// Workspace defaults applied when the user does not pick a target
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// Endpoints and timeout of the external mod services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_generate_url")]
    pub generate_url: String,

    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    #[serde(default = "default_port_url")]
    pub port_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            generate_url: default_generate_url(),
            chat_url: default_chat_url(),
            port_url: default_port_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Default loader and game version for new requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "default_loader")]
    pub default_loader: String,

    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            default_loader: default_loader(),
            default_version: default_version(),
        }
    }
}

fn default_generate_url() -> String {
    "https://functions.poehali.dev/5b951b0b-90dc-4d3c-9f01-e2b1f96ed534".to_string()
}

fn default_chat_url() -> String {
    "https://functions.poehali.dev/31764490-b8a3-4ee6-89ca-edb66ce2e95d".to_string()
}

fn default_port_url() -> String {
    "https://functions.poehali.dev/port-mod".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_loader() -> String {
    "forge".to_string()
}

fn default_version() -> String {
    "1.20.1".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Reads the YAML file at `path` when it exists (defaults apply when it
    /// does not), then applies `MODFORGE_*` environment overrides and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed,
    /// or when the resulting configuration is invalid
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("no config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ModforgeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            ModforgeError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `MODFORGE_*` environment variable overrides
    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("MODFORGE_GENERATE_URL") {
            self.service.generate_url = url;
        }
        if let Ok(url) = std::env::var("MODFORGE_CHAT_URL") {
            self.service.chat_url = url;
        }
        if let Ok(url) = std::env::var("MODFORGE_PORT_URL") {
            self.service.port_url = url;
        }
        if let Ok(timeout) = std::env::var("MODFORGE_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(seconds) => self.service.timeout_seconds = seconds,
                Err(_) => tracing::warn!("ignoring invalid MODFORGE_TIMEOUT_SECONDS: {}", timeout),
            }
        }
        if let Ok(loader) = std::env::var("MODFORGE_DEFAULT_LOADER") {
            self.workspace.default_loader = loader;
        }
        if let Ok(version) = std::env::var("MODFORGE_DEFAULT_VERSION") {
            self.workspace.default_version = version;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("service.generate_url", &self.service.generate_url),
            ("service.chat_url", &self.service.chat_url),
            ("service.port_url", &self.service.port_url),
        ] {
            if url.trim().is_empty() {
                return Err(ModforgeError::Config(format!("{} must not be empty", name)).into());
            }
        }
        if self.service.timeout_seconds == 0 {
            return Err(ModforgeError::Config(
                "service.timeout_seconds must be greater than zero".to_string(),
            )
            .into());
        }
        self.default_loader()?;
        if !is_supported_version(&self.workspace.default_version) {
            return Err(ModforgeError::Config(format!(
                "workspace.default_version {} is not a supported game version",
                self.workspace.default_version
            ))
            .into());
        }
        Ok(())
    }

    /// Default loader, parsed
    pub fn default_loader(&self) -> Result<Loader> {
        Loader::parse_str(&self.workspace.default_loader)
            .map_err(|e| ModforgeError::Config(e).into())
    }
}

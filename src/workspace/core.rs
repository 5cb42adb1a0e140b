//! Async workspace driver
//!
//! [`Workspace`] pairs the pure [`WorkspaceState`] transitions with a
//! [`ModService`] implementation and drives each flow end to end: begin,
//! await the service, finish. It also resolves unset loader and version
//! arguments from the configured defaults.

use crate::config::WorkspaceConfig;
use crate::error::{ModforgeError, Result};
use crate::service::base::ModService;
use crate::workspace::chat_log::ChatLog;
use crate::workspace::record::{Loader, ModRecord};
use crate::workspace::state::WorkspaceState;
use std::path::Path;

/// A session's mod workspace: record store, chat log, and service client
pub struct Workspace {
    state: WorkspaceState,
    service: Box<dyn ModService>,
    default_loader: Loader,
    default_version: String,
}

impl Workspace {
    pub fn new(service: Box<dyn ModService>, defaults: &WorkspaceConfig) -> Result<Self> {
        let default_loader = Loader::parse_str(&defaults.default_loader)
            .map_err(ModforgeError::Config)?;
        Ok(Self {
            state: WorkspaceState::new(),
            service,
            default_loader,
            default_version: defaults.default_version.clone(),
        })
    }

    /// Generate a new mod from a description
    ///
    /// On success the new record is at the front of the store and selected
    /// as the chat target; its id is returned.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank description, an unsupported version,
    /// an in-flight generation, or a service failure (the store is then
    /// unchanged)
    pub async fn generate(
        &mut self,
        description: &str,
        loader: Option<Loader>,
        version: Option<&str>,
    ) -> Result<String> {
        let loader = loader.unwrap_or(self.default_loader);
        let version = version.unwrap_or(&self.default_version);
        let request = self.state.begin_generation(description, loader, version)?;
        let outcome = self.service.generate(&request).await;
        self.state.finish_generation(&request, outcome)
    }

    /// Send a chat instruction against the active record
    ///
    /// Returns `Ok(None)` for a blank message (silently ignored). On
    /// success returns the assistant's reply and the active record's
    /// content has been replaced.
    pub async fn send_chat(&mut self, message: &str) -> Result<Option<String>> {
        let Some(request) = self.state.begin_chat(message)? else {
            return Ok(None);
        };
        let outcome = self.service.chat_update(&request).await;
        self.state.finish_chat(&request.mod_id, outcome).map(Some)
    }

    /// Port a jar file to a loader/version target
    ///
    /// Reads the jar from disk, sends it base64-encoded, and on success
    /// prepends the ported record (without changing the chat selection).
    /// On failure the jar stays selected so the user may retry.
    pub async fn port(
        &mut self,
        jar: &Path,
        loader: Option<Loader>,
        target_version: Option<&str>,
    ) -> Result<String> {
        let loader = loader.unwrap_or(self.default_loader);
        let target_version = target_version.unwrap_or(&self.default_version).to_string();
        if !crate::workspace::record::is_supported_version(&target_version) {
            return Err(ModforgeError::Validation(format!(
                "unsupported game version: {}",
                target_version
            ))
            .into());
        }

        let path = self.state.begin_port(jar)?;
        let outcome = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let request = WorkspaceState::port_request(&bytes, loader, &target_version);
                self.service.port(&request).await
            }
            Err(e) => Err(ModforgeError::Io(e).into()),
        };
        self.state.finish_port(loader, &target_version, outcome)
    }

    /// Mark a record as the chat target
    pub fn select(&mut self, id: &str) -> Result<()> {
        self.state.store.select(id)
    }

    /// All records, newest first
    pub fn records(&self) -> &[ModRecord] {
        self.state.store.records()
    }

    pub fn record(&self, id: &str) -> Option<&ModRecord> {
        self.state.store.get(id)
    }

    /// The currently selected record, if any
    pub fn active(&self) -> Option<&ModRecord> {
        self.state.store.active()
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.state.chat_log
    }

    /// Jar currently selected for porting, if any
    pub fn selected_jar(&self) -> Option<&Path> {
        self.state.selected_jar()
    }

    pub fn default_loader(&self) -> Loader {
        self.default_loader
    }

    pub fn default_version(&self) -> &str {
        &self.default_version
    }
}

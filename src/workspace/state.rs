//! Workspace state and flow transitions
//!
//! All session state lives in one [`WorkspaceState`] value mutated by pure
//! `begin_*` / `finish_*` transition functions. `begin_*` validates the
//! input, takes the flow's in-flight guard, and produces the request to
//! send; `finish_*` releases the guard and folds the service outcome back
//! into the store and chat log. The async driver ([`super::Workspace`])
//! only moves bytes between these transitions and the HTTP client, so
//! every state transition is unit-testable without I/O.
//!
//! Each of the three flows guards only its own in-flight flag; the flows
//! are mutually independent and may overlap. Chat requests are strictly
//! serialized by their guard so replies always append in submission order.

use crate::error::{ModforgeError, Result};
use crate::service::base::{
    ChatUpdateRequest, ChatUpdateResponse, GenerateRequest, GenerateResponse, PortRequest,
    PortResponse,
};
use crate::workspace::chat_log::{ChatLog, DEFAULT_ACK};
use crate::workspace::record::{is_supported_version, Loader, ModRecord};
use crate::workspace::store::RecordStore;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::path::{Path, PathBuf};

/// Session-scoped mutable state of the mod workspace
#[derive(Debug, Default)]
pub struct WorkspaceState {
    pub store: RecordStore,
    pub chat_log: ChatLog,
    generation_in_flight: bool,
    chat_in_flight: bool,
    porting_in_flight: bool,
    /// Jar picked for porting; retained across a failed port so the user
    /// may retry without re-selecting
    selected_jar: Option<PathBuf>,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- generation flow ---

    /// Validate generation inputs and take the generation guard
    ///
    /// Rejects a blank or whitespace-only description and an unsupported
    /// game version before any request is built. While a generation is
    /// pending, a second begin is rejected.
    pub fn begin_generation(
        &mut self,
        description: &str,
        loader: Loader,
        version: &str,
    ) -> Result<GenerateRequest> {
        if self.generation_in_flight {
            return Err(ModforgeError::Validation(
                "a generation request is already in flight".to_string(),
            )
            .into());
        }
        if description.trim().is_empty() {
            return Err(ModforgeError::Validation(
                "describe the mod you want to create".to_string(),
            )
            .into());
        }
        if !is_supported_version(version) {
            return Err(ModforgeError::Validation(format!(
                "unsupported game version: {}",
                version
            ))
            .into());
        }

        self.generation_in_flight = true;
        Ok(GenerateRequest {
            description: description.trim().to_string(),
            loader,
            version: version.to_string(),
        })
    }

    /// Fold a generation outcome into the store
    ///
    /// On success the new record is prepended and becomes the active
    /// record; on failure the store is left unchanged and the error is
    /// propagated. Either way the guard is released.
    pub fn finish_generation(
        &mut self,
        request: &GenerateRequest,
        outcome: Result<GenerateResponse>,
    ) -> Result<String> {
        self.generation_in_flight = false;
        let response = outcome?;

        let record = ModRecord::from_generation(
            response.mod_id,
            &request.description,
            request.loader,
            &request.version,
            response.mod_data,
        );
        let id = record.id.clone();
        tracing::info!("generated mod {} ({})", record.name, id);
        self.store.prepend(record);
        self.store.select(&id)?;
        Ok(id)
    }

    pub fn generation_in_flight(&self) -> bool {
        self.generation_in_flight
    }

    // --- chat/revision flow ---

    /// Validate a chat message and take the chat guard
    ///
    /// A blank message is silently ignored (`Ok(None)`, no state change).
    /// A non-blank message with no active record is a validation error and
    /// appends nothing. Otherwise the user message is appended to the log
    /// optimistically and the request to send is returned.
    pub fn begin_chat(&mut self, message: &str) -> Result<Option<ChatUpdateRequest>> {
        if message.trim().is_empty() {
            return Ok(None);
        }
        let Some(active) = self.store.active() else {
            return Err(
                ModforgeError::Validation("create or select a mod first".to_string()).into(),
            );
        };
        if self.chat_in_flight {
            return Err(ModforgeError::Validation(
                "an update request is already in flight".to_string(),
            )
            .into());
        }

        let request = ChatUpdateRequest {
            mod_id: active.id.clone(),
            message: message.trim().to_string(),
            current_code: active.content.clone().unwrap_or_default(),
        };
        self.chat_log.append_user(request.message.clone());
        self.chat_in_flight = true;
        Ok(Some(request))
    }

    /// Fold a chat outcome into the log and store
    ///
    /// On success the assistant reply (or a default acknowledgement) is
    /// appended and the targeted record's content is replaced wholesale.
    /// On failure an assistant-role error message is appended instead and
    /// the store is left unchanged.
    pub fn finish_chat(
        &mut self,
        mod_id: &str,
        outcome: Result<ChatUpdateResponse>,
    ) -> Result<String> {
        self.chat_in_flight = false;
        match outcome {
            Ok(response) => {
                let reply = response
                    .ai_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_ACK.to_string());
                self.store.replace_content(mod_id, response.updated_code)?;
                self.chat_log.append_assistant(reply.clone());
                Ok(reply)
            }
            Err(err) => {
                self.chat_log
                    .append_assistant(format!("Error: {}. Try rephrasing the request.", err));
                Err(err)
            }
        }
    }

    pub fn chat_in_flight(&self) -> bool {
        self.chat_in_flight
    }

    // --- porting flow ---

    /// Validate the jar path and take the porting guard
    ///
    /// The filename suffix is checked before any file read or network
    /// call; non-`.jar` files are rejected and not stored. On acceptance
    /// the path is remembered as the selected jar.
    pub fn begin_port(&mut self, path: &Path) -> Result<PathBuf> {
        if self.porting_in_flight {
            return Err(ModforgeError::Validation(
                "a porting request is already in flight".to_string(),
            )
            .into());
        }
        let is_jar = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("jar"))
            .unwrap_or(false);
        if !is_jar {
            return Err(ModforgeError::Validation(format!(
                "{} is not a .jar file",
                path.display()
            ))
            .into());
        }

        self.selected_jar = Some(path.to_path_buf());
        self.porting_in_flight = true;
        Ok(path.to_path_buf())
    }

    /// Build the porting request body from the jar's bytes
    pub fn port_request(jar_bytes: &[u8], loader: Loader, target_version: &str) -> PortRequest {
        PortRequest {
            jar_base64: BASE64.encode(jar_bytes),
            target_version: target_version.to_string(),
            loader,
        }
    }

    /// Fold a porting outcome into the store
    ///
    /// On success a new record (with the service-assigned id) is prepended
    /// and the selected-jar state is cleared. On failure the selected jar
    /// is retained so the user may retry. Either way the guard is
    /// released. Porting does not change the active chat record.
    pub fn finish_port(
        &mut self,
        loader: Loader,
        target_version: &str,
        outcome: Result<PortResponse>,
    ) -> Result<String> {
        self.porting_in_flight = false;
        match outcome {
            Ok(response) => {
                let record =
                    ModRecord::from_port(response.port_id, loader, target_version, response.mod_data);
                let id = record.id.clone();
                tracing::info!("ported mod {} ({})", record.name, id);
                self.store.prepend(record);
                self.selected_jar = None;
                Ok(id)
            }
            Err(err) => Err(err),
        }
    }

    pub fn porting_in_flight(&self) -> bool {
        self.porting_in_flight
    }

    /// Jar currently selected for porting, if any
    pub fn selected_jar(&self) -> Option<&Path> {
        self.selected_jar.as_deref()
    }
}

//! Workspace module for Modforge
//!
//! The workspace owns all session state: the record store, the chat log,
//! and the in-flight guards of the three service flows. Pure state
//! transitions live in [`state`]; the async driver that pairs them with a
//! service client lives in [`core`].

pub mod chat_log;
pub mod core;
pub mod record;
pub mod state;
pub mod store;

pub use chat_log::{ChatLog, ChatMessage, Role};
pub use core::Workspace;
pub use record::{Loader, ModContent, ModFile, ModRecord, RecordStatus, SUPPORTED_VERSIONS};
pub use state::WorkspaceState;
pub use store::RecordStore;

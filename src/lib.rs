//! Modforge - AI Minecraft mod generator CLI library
//!
//! This library provides the core functionality for the Modforge mod
//! workshop, including the session workspace, the external mod service
//! client, zip export, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `workspace`: Record store, chat log, and the flow state machine
//! - `service`: Mod service trait and the HTTP client for the three
//!   external endpoints (generation, chat update, porting)
//! - `export`: Zip export of a mod record as a Gradle project
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use modforge::config::Config;
//! use modforge::service::HttpModService;
//! use modforge::workspace::Workspace;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load(std::path::Path::new("config/config.yaml"))?;
//!     let service = HttpModService::new(config.service.clone())?;
//!     let mut workspace = Workspace::new(Box::new(service), &config.workspace)?;
//!
//!     let id = workspace.generate("an emerald sword", None, None).await?;
//!     let record = workspace.record(&id).unwrap();
//!     modforge::export::write_archive(record, std::path::Path::new("."))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod service;
pub mod workspace;

// Re-export commonly used types
pub use config::Config;
pub use error::{ModforgeError, Result};
pub use service::{HttpModService, ModService};
pub use workspace::{Loader, ModContent, ModRecord, Workspace};

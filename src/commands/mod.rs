//! Command handlers for Modforge
//!
//! Each CLI subcommand has a handler here; the interactive session's
//! slash-command parser lives in [`session_commands`].

pub mod generate;
pub mod port;
pub mod session;
pub mod session_commands;
pub mod versions;

pub use generate::handle_generate;
pub use port::handle_port;
pub use session::run_session;
pub use versions::handle_versions;

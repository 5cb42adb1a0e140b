//! Special commands parser for the interactive session
//!
//! This module parses the slash commands available during an interactive
//! workshop session. Special commands allow users to:
//! - Generate a new mod or port a jar without leaving the session
//! - Select which mod the chat targets
//! - List mods and export the selected one
//! - Change the session's target loader and game version
//!
//! Commands are prefixed with `/` and are case-insensitive in their
//! command word; arguments keep their case.

use crate::workspace::record::Loader;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing session commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Commands that can be executed during an interactive session
///
/// Slash commands act on session state; any other input is a chat
/// message for the currently selected mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Generate a new mod from a description
    Generate(String),

    /// Port a jar file to the session's target loader and version
    Port(PathBuf),

    /// Select the mod the chat flow targets
    Select(String),

    /// List all mods created this session
    ListMods,

    /// Export the selected mod as a zip archive, optionally into a
    /// specific directory
    Export(Option<PathBuf>),

    /// Change the session's target loader
    SetLoader(Loader),

    /// Change the session's target game version
    SetVersion(String),

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; send as a chat message
    Chat(String),
}

/// Parse a user input line into a session command
///
/// Input that does not start with `/` (and is not `exit`/`quit`) is a
/// chat message. Command words are case-insensitive.
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` for an unrecognized slash
/// command, `CommandError::MissingArgument` when a required argument is
/// absent, and `CommandError::UnsupportedArgument` for an invalid one.
pub fn parse_session_command(input: &str) -> Result<SessionCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') {
        if lower == "exit" || lower == "quit" {
            return Ok(SessionCommand::Exit);
        }
        return Ok(SessionCommand::Chat(trimmed.to_string()));
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_lowercase(), rest.trim()),
        None => (lower.clone(), ""),
    };

    match word.as_str() {
        "/generate" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/generate".to_string(),
                    usage: "/generate <description>".to_string(),
                })
            } else {
                Ok(SessionCommand::Generate(rest.to_string()))
            }
        }

        "/port" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/port".to_string(),
                    usage: "/port <path/to/mod.jar>".to_string(),
                })
            } else {
                Ok(SessionCommand::Port(PathBuf::from(rest)))
            }
        }

        "/select" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/select".to_string(),
                    usage: "/select <mod_id>".to_string(),
                })
            } else {
                Ok(SessionCommand::Select(rest.to_string()))
            }
        }

        "/mods" | "/list" => Ok(SessionCommand::ListMods),

        "/export" => {
            if rest.is_empty() {
                Ok(SessionCommand::Export(None))
            } else {
                Ok(SessionCommand::Export(Some(PathBuf::from(rest))))
            }
        }

        "/loader" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/loader".to_string(),
                    usage: "/loader <forge|fabric>".to_string(),
                })
            } else {
                Loader::parse_str(rest)
                    .map(SessionCommand::SetLoader)
                    .map_err(|_| CommandError::UnsupportedArgument {
                        command: "/loader".to_string(),
                        arg: rest.to_string(),
                    })
            }
        }

        "/version" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/version".to_string(),
                    usage: "/version <game_version>".to_string(),
                })
            } else {
                Ok(SessionCommand::SetVersion(rest.to_string()))
            }
        }

        "/help" | "/?" => Ok(SessionCommand::Help),

        "/exit" | "/quit" => Ok(SessionCommand::Exit),

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Display help text for session commands
pub fn print_help() {
    println!(
        r#"
Session Commands
================

MOD CREATION:
  /generate <description>  - Generate a new mod from a description
  /port <path/to/mod.jar>  - Port a jar to the session's loader/version

MOD MANAGEMENT:
  /mods                    - List mods created this session
  /select <mod_id>         - Pick which mod chat messages target
  /export [dir]            - Export the selected mod as a zip archive

SESSION TARGET:
  /loader <forge|fabric>   - Change the target loader
  /version <game_version>  - Change the target game version

SESSION INFORMATION:
  /help                    - Show this help message
  /?                       - Same as /help

SESSION CONTROL:
  exit                     - Exit the session
  quit                     - Same as exit

NOTES:
  - Command words are case-insensitive
  - Regular text (not starting with /) updates the selected mod
"#
    );
}

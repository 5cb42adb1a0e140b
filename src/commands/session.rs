//! Interactive workshop session
//!
//! Runs the read-eval loop for the `session` command: slash commands act
//! on the workspace, any other input is a chat instruction for the
//! selected mod. Flow failures are printed and the session continues.

use crate::commands::session_commands::{parse_session_command, print_help, SessionCommand};
use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::service::http::HttpModService;
use crate::workspace::chat_log::GREETING;
use crate::workspace::record::is_supported_version;
use crate::workspace::Workspace;
use colored::Colorize;
use prettytable::{row, Table};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

/// Run the interactive session until the user exits
pub async fn run_session(config: &Config) -> Result<()> {
    let service = HttpModService::new(config.service.clone())?;
    let mut workspace = Workspace::new(Box::new(service), &config.workspace)?;

    // Session-scoped target, seeded from config and adjustable with
    // /loader and /version
    let mut loader = workspace.default_loader();
    let mut version = workspace.default_version().to_string();

    println!("{}", "Modforge workshop session".bold());
    println!("Target: {} {}", loader.display_name(), version);
    println!("{}", GREETING.cyan());
    println!("Type '/help' for commands, 'exit' to quit.\n");

    let mut rl = DefaultEditor::new()
        .map_err(|e| anyhow::anyhow!("Failed to initialize line editor: {}", e))?;

    loop {
        let line = match rl.readline(&"modforge> ".green().to_string()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                tracing::error!("readline error: {}", e);
                break;
            }
        };

        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        let command = match parse_session_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            SessionCommand::Generate(description) => {
                println!("Generating mod...");
                match workspace
                    .generate(&description, Some(loader), Some(&version))
                    .await
                {
                    Ok(id) => {
                        if let Some(record) = workspace.record(&id) {
                            println!(
                                "{} {} ({})",
                                "Created".green(),
                                record.name.bold(),
                                record.id
                            );
                        }
                    }
                    Err(e) => println!("{}", format!("Generation failed: {}", e).red()),
                }
            }

            SessionCommand::Port(jar) => {
                println!("Porting {}...", jar.display());
                match workspace.port(&jar, Some(loader), Some(&version)).await {
                    Ok(id) => {
                        if let Some(record) = workspace.record(&id) {
                            println!("{} {} ({})", "Ported".green(), record.name.bold(), record.id);
                            println!("  {}", record.description);
                        }
                    }
                    Err(e) => {
                        println!("{}", format!("Porting failed: {}", e).red());
                        if workspace.selected_jar().is_some() {
                            println!("The jar stays selected; fix the problem and retry.");
                        }
                    }
                }
            }

            SessionCommand::Select(id) => match workspace.select(&id) {
                Ok(()) => {
                    if let Some(record) = workspace.record(&id) {
                        println!("Chat now targets {} ({})", record.name.bold(), record.id);
                    }
                }
                Err(e) => println!("{}", e.to_string().red()),
            },

            SessionCommand::ListMods => print_mods(&workspace),

            SessionCommand::Export(dir) => {
                let Some(record) = workspace.active() else {
                    println!("{}", "No mod selected. Use /select <mod_id> first.".red());
                    continue;
                };
                let out_dir = dir.as_deref().unwrap_or(Path::new("."));
                match export::write_archive(record, out_dir) {
                    Ok(path) => println!("{} {}", "Exported to".green(), path.display()),
                    Err(e) => println!("{}", format!("Export failed: {}", e).red()),
                }
            }

            SessionCommand::SetLoader(new_loader) => {
                loader = new_loader;
                println!("Target loader set to {}", loader.display_name().bold());
            }

            SessionCommand::SetVersion(new_version) => {
                if is_supported_version(&new_version) {
                    version = new_version;
                    println!("Target version set to {}", version.bold());
                } else {
                    println!(
                        "{}",
                        format!(
                            "Unsupported game version: {}. Use 'modforge versions' to list.",
                            new_version
                        )
                        .red()
                    );
                }
            }

            SessionCommand::Help => print_help(),

            SessionCommand::Exit => {
                println!("Goodbye!");
                break;
            }

            SessionCommand::Chat(message) => {
                match workspace.send_chat(&message).await {
                    // Blank input, nothing to do
                    Ok(None) => {}
                    Ok(Some(reply)) => println!("{}", reply.cyan()),
                    Err(e) => println!("{}", format!("Update failed: {}", e).red()),
                }
            }
        }
    }

    Ok(())
}

/// Print the session's mods as a table, newest first
fn print_mods(workspace: &Workspace) {
    if workspace.records().is_empty() {
        println!("No mods yet. Use /generate <description> to create one.");
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["", "ID", "NAME", "LOADER", "VERSION", "CREATED"]);
    for record in workspace.records() {
        let marker = if workspace.active().map(|a| a.id.as_str()) == Some(record.id.as_str()) {
            "*"
        } else {
            ""
        };
        table.add_row(row![
            marker,
            record.id,
            record.name,
            record.loader.display_name(),
            record.version,
            record.created_date
        ]);
    }
    table.printstd();
}

//! Command-line interface definition for Modforge
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for one-shot generation, jar porting, the
//! interactive session, and listing supported game versions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Modforge - AI Minecraft mod generator CLI
///
/// Generate, revise, port, and export Minecraft mods through the
/// external mod services.
#[derive(Parser, Debug, Clone)]
#[command(name = "modforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Modforge
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a mod from a description and export it as a zip archive
    Generate {
        /// Free-text description of the mod to create
        description: String,

        /// Target loader (forge, fabric); defaults to the configured loader
        #[arg(short, long)]
        loader: Option<String>,

        /// Target game version; defaults to the configured version
        #[arg(long)]
        version: Option<String>,

        /// Directory the archive is written into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Port an existing mod jar to another loader/version target
    Port {
        /// Path to the mod jar to port
        jar: PathBuf,

        /// Target loader (forge, fabric); defaults to the configured loader
        #[arg(short, long)]
        loader: Option<String>,

        /// Target game version; defaults to the configured version
        #[arg(short, long)]
        target_version: Option<String>,

        /// Directory the archive is written into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Start an interactive mod workshop session
    Session,

    /// List supported game versions
    Versions,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

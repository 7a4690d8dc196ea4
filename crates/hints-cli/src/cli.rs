//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect how hint sources resolve for host types
#[derive(Parser, Debug)]
#[command(name = "hints")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overrides directory (defaults to the platform config directory)
    #[arg(short, long, global = true, env = "HINTWEAVE_HINTS_DIR")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the effective hints for one identifier
    ///
    /// Examples:
    ///   hints resolve com.example.ChestScreen
    ///   hints resolve com.example.ChestScreen --catalog types.json --json
    Resolve {
        /// Identifier of the host type
        id: String,

        /// JSON type catalog providing markers and supertypes
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every entry loaded from override files and built-in defaults
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Report override files that fail to parse
    Check,

    /// Move a legacy single-file config into the overrides directory
    Migrate {
        /// Legacy config file (defaults to the platform location)
        #[arg(short, long)]
        legacy: Option<PathBuf>,
    },
}

mod theme;

pub use theme::{ColorPair, OutputFormat, SuggestFormat, ThemeCommands};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive, inspect and check portfolio themes
    #[command(alias = "themes")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },

    /// Show or reset configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Derive a complete portfolio color theme from two seed colors.
#[derive(Debug, Parser)]
#[command(name = "folio", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to a rolling file instead of stderr
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Profile file (.toml or .json) to read seed colors from
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,
}

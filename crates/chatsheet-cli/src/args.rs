use crate::types::{LogLevel, SheetFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatsheet")]
#[command(about = "Regroup chat session logs into speaker turns and export them as a sheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $CHATSHEET_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch sessions from the log service and export them
    Fetch {
        /// Session ids, separated by spaces and/or commas
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        #[arg(long, default_value = "csv")]
        format: SheetFormat,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Overrides `api.base_url` from the config
        #[arg(long)]
        base_url: Option<String>,

        /// Overrides `api.concurrency` from the config
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Export a saved session dump (`{"<id>": [...], ...}`)
    Convert {
        input: PathBuf,

        #[arg(long, default_value = "csv")]
        format: SheetFormat,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Organization-scoped folder retrieval and pagination
#[derive(Parser, Debug)]
#[command(name = "folder-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Folder records file (JSON), overrides the configured source
    #[arg(short, long, global = true, conflicts_with = "url")]
    pub data: Option<PathBuf>,

    /// Folder records URL (JSON), overrides the configured source
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every folder of an organization
    Fetch {
        /// Organization id
        #[arg(long)]
        org_id: Uuid,
    },

    /// Print an organization's folders page by page
    Page {
        /// Organization id
        #[arg(long)]
        org_id: Uuid,

        /// Folders per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Only print this page (zero-based)
        #[arg(long, allow_hyphen_values = true)]
        page: Option<i64>,
    },

    /// Check folder ids are unique across the whole source
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

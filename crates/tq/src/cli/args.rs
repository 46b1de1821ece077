//! Clap argument definitions for the `tq` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tq")]
#[command(about = "Text Query - boolean word search over the lines of a document")]
pub struct Cli {
    /// Verbosity level (-v for debug logs, -vv for trace logs)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flag selecting the document to index.
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// Text file to query [default: settings.document from .tq.toml]
    #[arg(short = 'd', long)]
    pub document: Option<PathBuf>,
}

/// Arguments for `tq query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    /// Words to search for (lines matching any of them, unless --all is given)
    #[arg(required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    /// Document selection.
    pub document: DocumentArgs,

    /// Only match lines containing every word
    #[arg(long)]
    pub all: bool,

    /// Drop lines containing this word (can be specified multiple times)
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Report the lines the query does not match
    #[arg(long)]
    pub invert: bool,

    /// Maximum matching lines to list [default: report.max_lines]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show the composed query without evaluating it
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `tq words`.
#[derive(Args, Debug, Clone)]
pub struct WordsCommand {
    #[command(flatten)]
    /// Document selection.
    pub document: DocumentArgs,

    /// Maximum words to list
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Order by number of lines (most frequent first) instead of alphabetically
    #[arg(long)]
    pub by_count: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tq init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.tq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Default document to record in the new file
    #[arg(short = 'd', long)]
    pub document: Option<PathBuf>,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `tq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a query and print the matching lines
    Query(QueryCommand),

    /// List indexed words and the lines they occur on
    Words(WordsCommand),

    /// Write a starter .tq.toml in the current directory
    Init(InitCommand),

    /// Show the effective configuration
    Config,
}

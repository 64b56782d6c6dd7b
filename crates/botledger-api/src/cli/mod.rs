//! CLI command definitions and dispatch for the `bledger` binary.
//!
//! Uses clap derive macros for argument parsing. Documents are passed as
//! JSON text, `@path` to read a file, or on stdin when omitted.

pub mod collections;
pub mod config;
pub mod input;
pub mod key;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Derive and check primary keys for bot-execution documents.
#[derive(Parser)]
#[command(name = "bledger", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the primary key of a document.
    Key {
        /// Collection token (e.g. Bot, Bot_Execution, GitHub_Object).
        collection: String,

        /// JSON document, `@path` to read a file, or `-`/omitted for stdin.
        doc: Option<String>,

        /// Escape `_` and `\` inside key values.
        #[arg(long)]
        escaped: bool,

        /// Accept object and array key values (legacy rendering).
        #[arg(long)]
        permissive: bool,
    },

    /// Validate a full document against its collection's record type.
    Check {
        /// Collection token.
        collection: String,

        /// JSON document, `@path` to read a file, or `-`/omitted for stdin.
        doc: Option<String>,

        /// Escape `_` and `\` inside key values.
        #[arg(long)]
        escaped: bool,
    },

    /// List collections with their key fields and references.
    #[command(alias = "ls")]
    Collections,

    /// Show the data directory and effective key options.
    Config,

    /// Print the payload hash of a GitHub webhook payload.
    Hash {
        /// JSON payload, `@path` to read a file, or `-`/omitted for stdin.
        payload: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

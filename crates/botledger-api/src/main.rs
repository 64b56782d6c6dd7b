//! botledger CLI entry point.
//!
//! Binary name: `bledger`
//!
//! Parses CLI arguments, sets up tracing, loads configuration from the data
//! directory, then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,botledger_core=debug",
        _ => "trace",
    };

    botledger_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli);
    botledger_observe::tracing_setup::shutdown_tracing();
    result
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bledger", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init();

    match cli.command {
        Commands::Key {
            collection,
            doc,
            escaped,
            permissive,
        } => {
            cli::key::derive_key(
                &state,
                &collection,
                doc.as_deref(),
                escaped,
                permissive,
                cli.json,
            )?;
        }

        Commands::Check {
            collection,
            doc,
            escaped,
        } => {
            cli::key::check_document(
                &state,
                &collection,
                doc.as_deref(),
                escaped,
                cli.json,
                cli.quiet,
            )?;
        }

        Commands::Collections => {
            cli::collections::list_collections(cli.json)?;
        }

        Commands::Config => {
            cli::config::show_config(&state, cli.json)?;
        }

        Commands::Hash { payload } => {
            cli::key::hash_payload(payload.as_deref(), cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

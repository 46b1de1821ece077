//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod query;
pub mod words;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Query(cmd) => query::run(ctx, &cmd),
        Commands::Words(cmd) => words::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}

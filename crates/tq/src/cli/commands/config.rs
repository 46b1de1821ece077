//! Implementation of `tq config`.

use std::process::ExitCode;

use tq_highlight::{Highlighter, dim, header, warning};

use crate::cli::context::CommandContext;

/// Shows which config file applies, the values in effect, and any warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    println!("{}", header("Config file:"));
    match config.source {
        Some(ref path) => println!("   {}", path.display()),
        None => println!("   {}", dim("none found, using defaults")),
    }
    println!();

    let toml = match config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: failed to serialize settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", header("Effective settings:"));
    print!("{}", Highlighter::new().highlight_toml(&toml));

    for w in config.validate() {
        eprintln!("{}", warning(&format!("warning: {w}")));
    }

    ExitCode::SUCCESS
}

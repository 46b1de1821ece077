//! Implementation of `tq init`.

use std::{fs, path::PathBuf, process::ExitCode};

use tq_config::{CONFIG_FILENAME, global_config_path, render_template};
use tq_highlight::{Highlighter, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a starter `.tq.toml` here, or `~/.tq.toml` with `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some(target) = target_path(ctx, cmd.global) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    if target.exists() && !cmd.force {
        eprintln!("error: {} already exists", target.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    // The global file is read from any directory, so it gets an absolute document path.
    let document = cmd.document.as_ref().map(|doc| {
        if cmd.global {
            ctx.cwd.join(doc)
        } else {
            doc.clone()
        }
    });
    let document = document.as_ref().map(|doc| doc.to_string_lossy());

    let text = match render_template(document.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to render config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = fs::write(&target, &text) {
        eprintln!("error: failed to write {}: {e}", target.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", target.display());
    println!();
    println!("{}", subheader("Contents:"));
    for line in Highlighter::new().highlight_toml(&text).lines() {
        println!("   {line}");
    }

    ExitCode::SUCCESS
}

/// Where the new file goes.
fn target_path(ctx: &CommandContext, global: bool) -> Option<PathBuf> {
    if global {
        global_config_path()
    } else {
        Some(ctx.cwd.join(CONFIG_FILENAME))
    }
}

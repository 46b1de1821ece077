//! Tracing initialization.

use std::io;

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Environment variable holding an explicit log filter, e.g. `TQ_LOG=tq_index=debug`.
const LOG_ENV: &str = "TQ_LOG";

/// Installs the global subscriber, writing compact events to stderr.
///
/// `verbose` raises the default level from warnings to debug (`-v`) or trace (`-vv`);
/// a filter in `TQ_LOG` takes precedence over both.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: failed to initialize logging: {e}");
    }
}

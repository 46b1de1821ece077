//! Writing rendered output to stdout.

use std::{
    io::{self, ErrorKind, IsTerminal, Write},
    process::ExitCode,
};

use serde::Serialize;

/// Returns true when stdout is a terminal, so styling escapes are worth emitting.
pub fn styled() -> bool {
    io::stdout().is_terminal()
}

/// Writes lines to stdout, one per line.
///
/// A closed pipe (e.g. `tq query ... | head`) ends output quietly.
pub fn write_lines<I, S>(lines: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stdout = io::stdout().lock();
    for line in lines {
        if let Err(e) = writeln!(stdout, "{}", line.as_ref()) {
            return write_failure(&e);
        }
    }
    match stdout.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => write_failure(&e),
    }
}

/// Serializes a value as pretty JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => write_lines([json]),
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Maps a stdout write error to an exit code.
fn write_failure(e: &io::Error) -> ExitCode {
    if e.kind() == ErrorKind::BrokenPipe {
        return ExitCode::SUCCESS;
    }
    eprintln!("error: failed to write output: {e}");
    ExitCode::FAILURE
}

//! Implementation of `tq words`.

use std::{cmp::Reverse, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use tq_highlight::dim;
use tq_index::{IndexStats, LineSet, TextIndex};

use crate::cli::{
    args::WordsCommand,
    context::CommandContext,
    output::{styled, write_json, write_lines},
};

/// JSON output for the word listing.
#[derive(Serialize)]
struct JsonWords<'a> {
    /// Index-wide counts.
    stats: IndexStats,
    /// Listed words.
    words: Vec<JsonWord<'a>>,
}

/// A single word in JSON output.
#[derive(Serialize)]
struct JsonWord<'a> {
    /// The word.
    word: &'a str,
    /// One-based numbers of the lines containing the word.
    lines: Vec<usize>,
}

/// Lists the words of the selected document.
pub fn run(ctx: &CommandContext, cmd: &WordsCommand) -> ExitCode {
    let index = match ctx.open_index(cmd.document.document.as_deref()) {
        Ok(index) => index,
        Err(code) => return code,
    };

    let entries = select(&index, cmd.by_count, cmd.limit);

    if cmd.json {
        let words = entries
            .iter()
            .map(|&(word, lines)| JsonWord {
                word,
                lines: lines.iter().map(|n| n + 1).collect(),
            })
            .collect();
        return write_json(&JsonWords {
            stats: index.stats(),
            words,
        });
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Word", "Lines", "First"]);
    for (word, lines) in &entries {
        let first = lines.first().map_or(String::new(), |n| (n + 1).to_string());
        table.add_row(vec![
            Cell::new(word),
            Cell::new(lines.len().to_string()),
            Cell::new(first),
        ]);
    }

    let stats = index.stats();
    let summary = format!(
        "{} words, {} lines, {} postings",
        stats.words, stats.lines, stats.postings
    );
    let summary = if styled() { dim(&summary) } else { summary };
    write_lines([table.to_string(), summary])
}

/// Picks the words to list, alphabetically or most frequent first, truncated to `limit`.
fn select(index: &TextIndex, by_count: bool, limit: Option<usize>) -> Vec<(&str, &LineSet)> {
    let mut entries: Vec<_> = index.words().collect();
    if by_count {
        // Stable sort keeps ties alphabetical.
        entries.sort_by_key(|(_, lines)| Reverse(lines.len()));
    }
    entries.truncate(limit.unwrap_or(usize::MAX));
    entries
}

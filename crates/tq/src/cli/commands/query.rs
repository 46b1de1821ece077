//! Implementation of `tq query`.

use std::process::ExitCode;

use serde::Serialize;
use tq_highlight::{dim, emphasize, subheader};
use tq_query::{Query, QueryResult, ReportOptions, negate, render_with, word};

use crate::cli::{
    args::QueryCommand,
    context::CommandContext,
    output::{styled, write_json, write_lines},
};

/// JSON output for a query report.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// The query's label.
    label: &'a str,
    /// Total number of matching lines.
    count: usize,
    /// Listed matches (possibly truncated).
    lines: Vec<JsonLine<'a>>,
}

/// A single matching line in JSON output.
#[derive(Serialize)]
struct JsonLine<'a> {
    /// One-based line number.
    line: usize,
    /// Line text.
    text: &'a str,
}

/// Evaluates the composed query and prints its report.
pub fn run(ctx: &CommandContext, cmd: &QueryCommand) -> ExitCode {
    let Some(query) = compose(&cmd.words, cmd.all, &cmd.exclude, cmd.invert) else {
        eprintln!("error: no words given");
        return ExitCode::FAILURE;
    };

    if cmd.explain {
        return write_lines(explain(&query));
    }

    let index = match ctx.open_index(cmd.document.document.as_deref()) {
        Ok(index) => index,
        Err(code) => return code,
    };

    let options = ReportOptions {
        indent: ctx.config.report.indent.clone(),
        max_lines: cmd.limit.or(ctx.config.report.max_lines),
    };

    let result = query.eval(&index);

    if cmd.json {
        return write_json(&json_report(&result, options.max_lines));
    }

    let lines = render_with(&result, &options);
    if styled() {
        write_lines(style_report(&lines, &query.terms()))
    } else {
        write_lines(lines)
    }
}

/// Builds the query described by the command-line words and flags.
///
/// Words are joined with `|` (or `&` when `all` is set), every excluded word is removed with
/// `& ~(word)`, and `invert` negates the whole expression. Returns `None` without words.
pub fn compose(words: &[String], all: bool, exclude: &[String], invert: bool) -> Option<Query> {
    let base = words
        .iter()
        .map(word)
        .reduce(|acc, next| if all { acc & next } else { acc | next })?;

    let filtered = exclude
        .iter()
        .fold(base, |acc, excluded| acc & negate(&word(excluded)));

    Some(if invert { !filtered } else { filtered })
}

/// Lines describing a query without evaluating it.
fn explain(query: &Query) -> Vec<String> {
    let mut lines = vec![subheader("Query:"), format!("   {query}"), String::new()];
    lines.push(subheader("Query tree:"));
    lines.extend(format!("{query:#}").lines().map(|l| format!("   {l}")));
    lines
}

/// Applies terminal styling: a bold header and emphasised matching words.
fn style_report(lines: &[String], terms: &[&str]) -> Vec<String> {
    let mut styled_lines = Vec::with_capacity(lines.len());
    let mut iter = lines.iter();
    if let Some(header) = iter.next() {
        styled_lines.push(subheader(header));
    }
    for line in iter {
        match line.split_once(") ") {
            Some((prefix, text)) if prefix.trim_start().starts_with("(line ") => {
                let number = dim(&format!("{prefix})"));
                styled_lines.push(format!("{number} {}", emphasize(text, terms)));
            }
            _ => styled_lines.push(dim(line)),
        }
    }
    styled_lines
}

/// Converts a result into its JSON form, listing at most `max_lines` matches.
fn json_report(result: &QueryResult, max_lines: Option<usize>) -> JsonReport<'_> {
    let lines = result
        .iter()
        .take(max_lines.unwrap_or(usize::MAX))
        .map(|(n, text)| JsonLine { line: n + 1, text })
        .collect();

    JsonReport {
        label: result.label(),
        count: result.len(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use tq_index::{Document, TextIndex};

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn compose_single_word() {
        let query = compose(&strings(&["roads"]), false, &[], false).unwrap();
        assert_eq!(query.represent(), "roads");
    }

    #[test]
    fn compose_any_and_all() {
        let words = strings(&["a", "b", "c"]);
        assert_eq!(
            compose(&words, false, &[], false).unwrap().represent(),
            "((a | b) | c)"
        );
        assert_eq!(
            compose(&words, true, &[], false).unwrap().represent(),
            "((a & b) & c)"
        );
    }

    #[test]
    fn compose_exclusions_and_inversion() {
        let query = compose(&strings(&["a"]), false, &strings(&["b", "c"]), true).unwrap();
        assert_eq!(query.represent(), "~(((a & ~(b)) & ~(c)))");
    }

    #[test]
    fn compose_without_words() {
        assert!(compose(&[], true, &strings(&["b"]), false).is_none());
    }

    #[test]
    fn explain_shows_representation_and_outline() {
        let query = compose(&strings(&["a", "b"]), true, &[], false).unwrap();
        let text = explain(&query).join("\n");
        assert!(text.contains("(a & b)"));
        assert!(text.contains("Query tree:"));
        assert!(text.contains("   And"));
        assert!(text.contains("     Word(\"b\")"));
    }

    #[test]
    fn json_report_uses_one_based_lines() {
        let index = TextIndex::build(&Document::from_lines([
            "fiery shone the roads",
            "but we had roads",
        ]));
        let result = word("roads").eval(&index);

        let report = json_report(&result, Some(1));
        assert_eq!(report.count, 2);
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].line, 1);
        assert_eq!(report.lines[0].text, "fiery shone the roads");
    }

    #[test]
    fn style_report_dims_summary_line() {
        let lines = strings(&["q occurs 3 times", "\t(line 1) q", "\t... and 2 more"]);
        let styled = style_report(&lines, &["q"]);
        assert_eq!(styled.len(), 3);
        assert!(styled[1].ends_with("\x1b[1mq\x1b[0m"));
        assert!(styled[1].contains("(line 1"));
        assert!(styled[2].starts_with("\x1b[2m"));
    }
}

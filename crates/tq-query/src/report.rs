//! Plain-text rendering of query results.
//!
//! A report is a header naming the query and how many lines matched, followed by one entry
//! per matching line:
//!
//! ```text
//! roads occurs 2 times
//! 	(line 1) fiery shone the roads
//! 	(line 2) but we had roads
//! ```
//!
//! Rendering only builds the lines; writing them anywhere is up to the caller.

use crate::QueryResult;

/// Layout options for a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Prefix written before each matching line.
    pub indent: String,
    /// Maximum number of matching lines to list; the rest are summarised.
    pub max_lines: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            indent: String::from("\t"),
            max_lines: None,
        }
    }
}

/// Renders a result with the default layout.
pub fn render(result: &QueryResult) -> Vec<String> {
    render_with(result, &ReportOptions::default())
}

/// Renders a result with the given layout.
pub fn render_with(result: &QueryResult, options: &ReportOptions) -> Vec<String> {
    let count = result.len();
    let shown = options.max_lines.map_or(count, |max| max.min(count));

    let mut out = Vec::with_capacity(shown + 2);
    out.push(format!(
        "{} occurs {count} {}",
        result.label(),
        plural(count, "time", "s")
    ));

    for (n, text) in result.iter().take(shown) {
        out.push(format!("{}(line {}) {text}", options.indent, n + 1));
    }

    if shown < count {
        out.push(format!("{}... and {} more", options.indent, count - shown));
    }

    out
}

/// Appends `ending` to `word` unless `count` is exactly one.
fn plural(count: usize, word: &str, ending: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}{ending}")
    }
}

//! The starter file written by `tq init`.

use serde::Serialize;

/// A `document = "..."` line, quoted the way TOML requires.
#[derive(Serialize)]
struct DocumentLine<'a> {
    /// The document path.
    document: &'a str,
}

/// Renders a starter `.tq.toml`.
///
/// With a document the `settings.document` key is filled in; otherwise it is left as a
/// commented example. Report keys are always commented out at their defaults.
pub fn render_template(document: Option<&str>) -> Result<String, toml::ser::Error> {
    let document_line = match document {
        Some(document) => toml::to_string(&DocumentLine { document })?,
        None => String::from("# document = \"notes.txt\"\n"),
    };

    Ok(format!(
        "# tq configuration\n\
         #\n\
         # tq uses the nearest .tq.toml at or above the working directory,\n\
         # and ~/.tq.toml when there is none.\n\
         \n\
         [settings]\n\
         # Document to query when no --document is given (relative to this file).\n\
         {document_line}\
         \n\
         [report]\n\
         # Prefix for each listed line.\n\
         # indent = \"\\t\"\n\
         # Lines to list per report, 0 for all.\n\
         # max_lines = 0\n"
    ))
}

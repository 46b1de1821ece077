//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured document does not exist.
    DocumentMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured document exists but is not a regular file.
    DocumentNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// The report indent contains characters other than whitespace.
    IndentNotWhitespace {
        /// The configured indent.
        indent: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentMissing { path } => {
                write!(f, "configured document does not exist: {path}")
            }
            Self::DocumentNotFile { path } => {
                write!(f, "configured document is not a file: {path}")
            }
            Self::IndentNotWhitespace { indent } => {
                write!(f, "report indent {indent:?} contains non-whitespace characters")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A configured document that is missing or not a regular file
/// - A report indent containing visible characters
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref path) = config.settings.document {
        if !path.exists() {
            warnings.push(ConfigWarning::DocumentMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::DocumentNotFile {
                path: path.display().to_string(),
            });
        }
    }

    let indent = &config.report.indent;
    if !indent.chars().all(char::is_whitespace) {
        warnings.push(ConfigWarning::IndentNotWhitespace {
            indent: indent.clone(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use std::fs;

    use super::*;
    use crate::{ReportSettings, Settings};

    fn with_document(path: PathBuf) -> Config {
        Config {
            settings: Settings {
                document: Some(path),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn test_validate_document_missing() {
        let warnings = with_document(PathBuf::from("/nonexistent/path/12345.txt")).validate();
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::DocumentMissing { .. }]
        ));
    }

    #[test]
    fn test_validate_document_is_directory() {
        let dir = tempfile::tempdir().unwrap();

        let warnings = with_document(dir.path().to_path_buf()).validate();
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::DocumentNotFile { .. }]
        ));
    }

    #[test]
    fn test_validate_document_ok() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "some words\n").unwrap();
        assert!(with_document(file).validate().is_empty());
    }

    #[test]
    fn test_validate_visible_indent() {
        let config = Config {
            report: ReportSettings {
                indent: String::from("> "),
                max_lines: None,
            },
            ..Default::default()
        };

        let warnings = config.validate();
        assert_eq!(
            warnings,
            vec![ConfigWarning::IndentNotWhitespace {
                indent: String::from("> ")
            }]
        );
        assert!(warnings[0].to_string().contains("\"> \""));
    }
}

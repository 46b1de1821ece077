//! Configuration for tq.
//!
//! A `.tq.toml` names the document to query by default and how reports are laid out:
//!
//! ```toml
//! [settings]
//! document = "notes.txt"   # relative to this file, `~/` allowed
//!
//! [report]
//! indent = "  "
//! max_lines = 20           # 0 lists every line
//! ```
//!
//! The file used is the nearest one at or above the working directory, or `~/.tq.toml` if
//! there is none. Without any file, [`Config::default`] applies.

#![warn(missing_docs)]

mod error;
mod file;
mod locate;
mod template;
mod validate;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use file::{ConfigFile, FileReport, FileSettings};
pub use locate::{CONFIG_FILENAME, global_config_path, locate_config};
use serde::Serialize;
pub use template::render_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// The configuration in effect for one run of tq.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Report layout settings.
    pub report: ReportSettings,
    /// The file these values came from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads the config file that applies to `cwd`, or the defaults if there is none.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match locate_config(cwd) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        ConfigFile::read(path)?.resolve(path)
    }

    /// Checks the loaded values and returns anything worth warning about.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective values as `.tq.toml` text. Unset values are left out.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Effective {
            settings: &self.settings,
            report: &self.report,
        })
    }
}

/// General settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Document to query when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

/// Report layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSettings {
    /// Prefix written before each matching line.
    pub indent: String,
    /// Maximum matching lines to list per report (`None` lists all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            indent: String::from("\t"),
            max_lines: None,
        }
    }
}

/// Borrowed view used by [`Config::settings_to_toml`].
#[derive(Serialize)]
struct Effective<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Report layout settings.
    report: &'a ReportSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_list_everything_with_a_tab() {
        let config = Config::default();
        assert_eq!(config.report.indent, "\t");
        assert!(config.report.max_lines.is_none());
        assert!(config.settings.document.is_none());
        assert!(config.source.is_none());
    }

    #[test]
    fn effective_toml_reads_back_the_same() {
        let config = Config {
            settings: Settings {
                document: Some(PathBuf::from("/tmp/notes.txt")),
            },
            report: ReportSettings {
                indent: String::from("  "),
                max_lines: Some(3),
            },
            source: None,
        };
        let text = config.settings_to_toml().unwrap();
        assert!(text.contains("document = \"/tmp/notes.txt\""));
        assert!(text.contains("max_lines = 3"));

        let reread = ConfigFile::parse(&text, Path::new("effective.toml"))
            .unwrap()
            .resolve(Path::new("/elsewhere/.tq.toml"))
            .unwrap();
        assert_eq!(reread.settings, config.settings);
        assert_eq!(reread.report, config.report);
    }

    #[test]
    fn effective_toml_omits_unset_values() {
        let text = Config::default().settings_to_toml().unwrap();
        assert!(!text.contains("document"));
        assert!(!text.contains("max_lines"));
        assert!(text.contains("indent = "));
    }
}

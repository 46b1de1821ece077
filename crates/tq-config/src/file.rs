//! The on-disk `.tq.toml` format.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Config, ConfigError, ReportSettings, Settings, locate::home_dir};

/// A `.tq.toml` file as written by the user. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// The `[settings]` table.
    pub settings: FileSettings,
    /// The `[report]` table.
    pub report: FileReport,
}

/// The `[settings]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    /// Default document, as written (may be relative or start with `~/`).
    pub document: Option<String>,
}

/// The `[report]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileReport {
    /// Prefix for every listed line.
    pub indent: Option<String>,
    /// Lines to list per report; `0` lists all of them.
    pub max_lines: Option<usize>,
}

impl ConfigFile {
    /// Reads and parses `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parses file contents; `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fills in defaults and anchors the document path, turning the file into a [`Config`].
    ///
    /// A relative document is taken relative to the directory holding `path`.
    pub fn resolve(self, path: &Path) -> Result<Config, ConfigError> {
        let base = path.parent().unwrap_or(Path::new(""));
        let document = self
            .settings
            .document
            .map(|doc| document_path(&doc, base, path))
            .transpose()?;

        let defaults = ReportSettings::default();
        let report = ReportSettings {
            indent: self.report.indent.unwrap_or(defaults.indent),
            max_lines: self.report.max_lines.filter(|&n| n > 0),
        };

        Ok(Config {
            settings: Settings { document },
            report,
            source: Some(path.to_path_buf()),
        })
    }
}

/// Expands `~/` and joins relative paths onto `base`.
fn document_path(doc: &str, base: &Path, config: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = match doc.strip_prefix("~/") {
        Some(rest) => home_dir()
            .ok_or_else(|| ConfigError::NoHome {
                path: config.to_path_buf(),
            })?
            .join(rest),
        None => PathBuf::from(doc),
    };
    Ok(base.join(expanded))
}

//! Errors raised while loading `.tq.toml`.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Why a configuration file could not be turned into a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid TOML or contains keys tq does not know.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// The config file.
        path: PathBuf,
        /// Underlying TOML error, including the offending line.
        source: de::Error,
    },

    /// `settings.document` starts with `~` but there is no home directory to expand it to.
    #[error("{path}: cannot expand `~` in settings.document without a home directory")]
    NoHome {
        /// The config file.
        path: PathBuf,
    },
}

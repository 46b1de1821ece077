//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use tq_config::Config;
use tq_document::Document;
use tq_index::TextIndex;
use tracing::{debug, info};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Picks the document to query: the command-line flag, else the configured default.
    pub fn document_path(&self, flag: Option<&Path>) -> Result<PathBuf, ExitCode> {
        if let Some(path) = flag {
            return Ok(self.cwd.join(path));
        }
        match self.config.settings.document {
            Some(ref path) => Ok(path.clone()),
            None => {
                eprintln!("error: no document given");
                eprintln!("pass --document or set settings.document in .tq.toml");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Loads the selected document and builds its index.
    pub fn open_index(&self, flag: Option<&Path>) -> Result<TextIndex, ExitCode> {
        let path = self.document_path(flag)?;

        let start = Instant::now();
        let document = match Document::open(&path) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        debug!(path = %path.display(), lines = document.len(), "loaded document");

        let index = TextIndex::build(&document);
        info!(
            path = %path.display(),
            words = index.word_count(),
            elapsed = ?start.elapsed(),
            "indexed document"
        );
        Ok(index)
    }
}

/// Returns the current working directory, exiting with a consistent error on failure.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    match env::current_dir() {
        Ok(cwd) => Ok(cwd),
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// Loads configuration, exiting with a consistent error on failure.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    match Config::load(cwd) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("error: failed to load configuration: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

//! Finding the configuration file that applies to a directory.
//!
//! Exactly one file is used: the nearest `.tq.toml` in the working directory or one of its
//! ancestors, falling back to `~/.tq.toml`. Files are never layered on top of each other.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Name of tq configuration files.
pub const CONFIG_FILENAME: &str = ".tq.toml";

/// Returns the config file that applies to `cwd`, if any.
pub fn locate_config(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .chain(global_config_path())
        .find(|candidate| candidate.is_file())
}

/// Returns `~/.tq.toml`, whether or not it exists.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILENAME))
}

/// The user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

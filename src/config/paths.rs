use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// Utility struct for locating configuration files
///
/// System configuration lives at fixed absolute paths; user configuration
/// is resolved under the XDG config home.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the base directory for per-user configuration
    ///
    /// Follows the XDG Base Directory specification:
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_home() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(Ok)
            .unwrap_or_else(|| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home))
    }

    /// Resolves a path relative to the user config home
    ///
    /// # Errors
    /// Returns an error if the config home cannot be determined
    pub fn user_file(relative: &Path) -> Result<PathBuf, Error> {
        Ok(Self::config_home()?.join(relative))
    }
}

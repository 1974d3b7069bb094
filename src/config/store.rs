//! The user config store.
//!
//! One record per user, kept at `<config dir>/turborepo/config.json`.
//! Every call is a blocking filesystem transaction; there is no locking and
//! the last writer wins.

use std::path::PathBuf;

use crate::config::loader::{read_config_file, write_config_file, ConfigError, LoadError};
use crate::config::paths::{PathResolver, XdgConfigDir};
use crate::config::types::UserConfig;

/// Directory under the platform config dir that holds our files.
pub const CONFIG_NAMESPACE: &str = "turborepo";
/// File name of the user config.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes the user config through a [`PathResolver`].
#[derive(Debug, Clone, Default)]
pub struct UserConfigStore<R = XdgConfigDir> {
    resolver: R,
}

impl UserConfigStore<XdgConfigDir> {
    /// Store backed by the platform's per-user config directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: PathResolver> UserConfigStore<R> {
    /// Store that locates its files through `resolver`.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Path of the config file `name`, creating its directory if needed.
    pub fn config_path(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let path = self
            .resolver
            .resolve(CONFIG_NAMESPACE, name)
            .map_err(|e| ConfigError::PathResolution {
                name: name.to_string(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), "Resolved config path");
        Ok(path)
    }

    /// Path of the user config file.
    pub fn user_config_path(&self) -> Result<PathBuf, ConfigError> {
        self.config_path(CONFIG_FILE_NAME)
    }

    /// Overwrite the user config with `config`.
    pub fn write(&self, config: &UserConfig) -> Result<(), ConfigError> {
        let path = self.user_config_path()?;
        write_config_file(&path, config)
    }

    /// Read the user config.
    ///
    /// If the path cannot be resolved, the file is missing, or it does not
    /// parse, the error carries the default record.
    pub fn read(&self) -> Result<UserConfig, LoadError> {
        let path = self.user_config_path().map_err(LoadError::new)?;
        read_config_file(&path)
    }

    /// Clear the stored record.
    ///
    /// The file is kept and holds `{}`, URLs included; the next `read`
    /// brings the default URLs back.
    pub fn reset(&self) -> Result<(), ConfigError> {
        tracing::debug!("Resetting user config");
        self.write(&UserConfig::empty())
    }

    /// Read, let `f` change the record, then write the whole record back.
    ///
    /// A file that is missing starts from the defaults. Any other read
    /// failure is returned and nothing is written.
    pub fn update<F>(&self, f: F) -> Result<UserConfig, ConfigError>
    where
        F: FnOnce(&mut UserConfig),
    {
        let mut config = match self.read() {
            Ok(config) => config,
            Err(err) if err.error().is_not_found() => err.into_config(),
            Err(err) => return Err(err.into()),
        };
        f(&mut config);
        self.write(&config)?;
        Ok(config)
    }
}

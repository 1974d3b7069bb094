use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::UserConfig;

/// Errors that can occur when locating, loading or saving the user config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot get configuration file {name:?}: {source}")]
    PathResolution {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// True when the config file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// A failed load, together with the record the caller can fall back to.
///
/// The fallback is always [`UserConfig::default()`]: logged out, with the
/// built-in URLs.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct LoadError {
    config: UserConfig,
    #[source]
    source: ConfigError,
}

impl LoadError {
    pub(crate) fn new(source: ConfigError) -> Self {
        Self {
            config: UserConfig::default(),
            source,
        }
    }

    /// The usable default record.
    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    /// The reason the load failed.
    pub fn error(&self) -> &ConfigError {
        &self.source
    }

    /// Give up on the error and continue with the default record.
    pub fn into_config(self) -> UserConfig {
        if self.source.is_not_found() {
            tracing::debug!("{}; using defaults", self.source);
        } else {
            tracing::warn!("{}; using defaults", self.source);
        }
        self.config
    }

    /// Split into the default record and the error, without logging.
    pub fn into_parts(self) -> (UserConfig, ConfigError) {
        (self.config, self.source)
    }
}

impl From<LoadError> for ConfigError {
    fn from(err: LoadError) -> Self {
        err.source
    }
}

/// Reads the config file at `path`, on top of the defaults.
///
/// Keys missing from the file keep their default value. On any failure the
/// returned [`LoadError`] still carries the default record.
pub fn read_config_file(path: &Path) -> Result<UserConfig, LoadError> {
    let bytes = fs::read(path).map_err(|e| {
        LoadError::new(ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    let config: UserConfig = serde_json::from_slice(&bytes).map_err(|e| {
        LoadError::new(ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    tracing::debug!(path = %path.display(), "Loaded user config");
    Ok(config)
}

/// Writes `config` to `path` as compact JSON, replacing any previous content.
///
/// On Unix the file is owner read/write only (0600), including when it
/// already existed with wider permissions. The write is not atomic.
pub fn write_config_file(path: &Path, config: &UserConfig) -> Result<(), ConfigError> {
    let bytes = serde_json::to_vec(config).map_err(ConfigError::Serialize)?;

    let write_err = |e: io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(write_err)?;

    // `mode` only applies on creation.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(write_err)?;
    }

    file.write_all(&bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote user config");
    Ok(())
}

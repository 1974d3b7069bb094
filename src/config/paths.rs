//! Resolution of config file locations.
//!
//! The store never asks the platform for a directory itself; it goes
//! through a [`PathResolver`], so tests and `--config-dir` can point it at
//! any directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maps `(namespace, file name)` to an absolute file path.
///
/// Implementations create any missing parent directories before returning.
pub trait PathResolver {
    fn resolve(&self, namespace: &str, name: &str) -> io::Result<PathBuf>;
}

/// The per-user config directory of the platform.
///
/// `$XDG_CONFIG_HOME` or `~/.config` on Linux, `~/Library/Application
/// Support` on macOS, `%LOCALAPPDATA%` (not the roaming `%APPDATA%`) on
/// Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct XdgConfigDir;

impl XdgConfigDir {
    fn base_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_local_dir()
        }
        #[cfg(not(windows))]
        {
            dirs::config_dir()
        }
    }
}

impl PathResolver for XdgConfigDir {
    fn resolve(&self, namespace: &str, name: &str) -> io::Result<PathBuf> {
        let base = Self::base_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "no per-user config directory on this platform",
            )
        })?;
        ensure_file_path(&base, namespace, name)
    }
}

/// A caller-chosen base directory.
#[derive(Debug, Clone)]
pub struct FixedDir {
    base: PathBuf,
}

impl FixedDir {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl PathResolver for FixedDir {
    fn resolve(&self, namespace: &str, name: &str) -> io::Result<PathBuf> {
        let base = if self.base.is_absolute() {
            self.base.clone()
        } else {
            std::env::current_dir()?.join(&self.base)
        };
        ensure_file_path(&base, namespace, name)
    }
}

fn ensure_file_path(base: &Path, namespace: &str, name: &str) -> io::Result<PathBuf> {
    let path = base.join(namespace).join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path)
}

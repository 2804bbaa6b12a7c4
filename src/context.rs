//! Project context resolution for htmlsplice.
//!
//! Finds the config file a command should use and the directory that
//! relative target paths resolve against. Every command that reads config
//! goes through here, so `--config` and the default lookup behave the same
//! everywhere.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, SpliceError};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved config and the base directory for its relative paths.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Directory that target `files` and `dest` are relative to.
    pub base_dir: PathBuf,

    /// Directory that paths given on the command line are relative to.
    pub cwd: PathBuf,

    /// The config file in use, or `None` when running on defaults.
    pub config_path: Option<PathBuf>,

    pub config: Config,
}

impl ProjectContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(explicit_config: Option<&Path>) -> Result<Self> {
        let cwd = current_dir()?;
        Self::resolve_from(&cwd, explicit_config)
    }

    /// Resolve the context from a specific directory.
    ///
    /// - An explicit config path must exist; its directory becomes the base.
    /// - Otherwise `htmlsplice.yaml` in `cwd` is used when present.
    /// - Otherwise defaults apply and `cwd` is the base.
    pub fn resolve_from(cwd: &Path, explicit_config: Option<&Path>) -> Result<Self> {
        let config_path = match explicit_config {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(SpliceError::UserError(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => {
                let path = cwd.join(DEFAULT_CONFIG_FILE);
                path.is_file().then_some(path)
            }
        };

        let Some(config_path) = config_path else {
            tracing::debug!(cwd = %cwd.display(), "no config file, using defaults");
            return Ok(Self {
                base_dir: cwd.to_path_buf(),
                cwd: cwd.to_path_buf(),
                config_path: None,
                config: Config::default(),
            });
        };

        let config = Config::load(&config_path)?;
        let base_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        tracing::debug!(config = %config_path.display(), "loaded config");
        Ok(Self {
            base_dir,
            cwd: cwd.to_path_buf(),
            config_path: Some(config_path),
            config,
        })
    }

    /// Error unless a config file was found.
    pub fn require_config_file(&self) -> Result<&Path> {
        self.config_path.as_deref().ok_or_else(|| {
            SpliceError::UserError(format!(
                "no {} found.\n\
                 Run `htmlsplice init` to create one, or pass files with `--dest`.",
                DEFAULT_CONFIG_FILE
            ))
        })
    }
}

/// The process working directory as a user-facing error on failure.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        SpliceError::UserError(format!("failed to get current working directory: {}", e))
    })
}

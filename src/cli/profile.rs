//! `CheckProfile` and config path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::{CheckerConfig, ConfigSource, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// What to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMode {
    Single(PathBuf),
    Batch(PathBuf),
}

impl CheckMode {
    pub fn target(&self) -> &Path {
        match self {
            CheckMode::Single(path) | CheckMode::Batch(path) => path,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Single(_) => "single",
            CheckMode::Batch(_) => "batch",
        }
    }
}

/// Resolved invocation.
#[derive(Debug, Clone)]
pub struct CheckProfile {
    pub mode: CheckMode,
    pub min_fill_pct: Option<u8>,
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
}

impl CheckProfile {
    /// The command-line threshold wins over the config file.
    pub fn effective_min_fill(&self, config: &CheckerConfig) -> u8 {
        self.min_fill_pct.unwrap_or(config.check.min_fill_pct)
    }
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}

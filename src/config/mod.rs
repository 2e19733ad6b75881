//! Load and validate the optional checker configuration file.
use std::path::PathBuf;

use config::FileFormat;
use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod check;
pub mod rasterizer;
pub mod telemetry;

pub use check::{parse_check_section, CheckSection, RawCheckSection};
pub use rasterizer::{parse_rasterizer_section, RasterizerSection, RawRasterizerSection};

pub const CONFIG_ENV_KEY: &str = "POSTER_FILL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "poster-fill.toml";

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    pub rasterizer: RasterizerSection,
    pub check: CheckSection,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckerConfig {
    rasterizer: Option<RawRasterizerSection>,
    check: Option<RawCheckSection>,
}

impl CheckerConfig {
    /// Load the file at `path`, except that a missing file at the default
    /// location falls back to built-in defaults.
    pub fn load(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        if source == ConfigSource::Default && !path.exists() {
            telemetry::log_missing_default(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "poster_fill::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawCheckerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "poster_fill::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "poster_fill::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCheckerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let rasterizer = parse_rasterizer_section(raw.rasterizer, &path)?;
        let check = parse_check_section(raw.check, &path)?;

        Ok(Self {
            rasterizer,
            check,
            source_path: Some(path),
        })
    }
}

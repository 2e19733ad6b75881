use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failure reasons for a single poster fill check.
///
/// None of these are retried. A poster that renders fine but is sparsely
/// filled is not an error; it comes back as a low percentage instead.
#[derive(Debug, Error)]
pub enum FillError {
    #[error("pdftoppm failed ({}): {message}", exit_label(.exit_code))]
    RasterizationFailed {
        exit_code: Option<i32>,
        message: String,
    },
    #[error("failed to launch rasterizer `{program}`: {source}")]
    RasterizerUnavailable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create scratch directory: {source}")]
    ScratchDir {
        #[source]
        source: io::Error,
    },
    #[error("Could not render PDF to PGM (no output in {dir})")]
    NoOutputProduced { dir: PathBuf },
    #[error("failed to read raster {path}: {source}")]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unexpected PGM format: {magic}")]
    UnsupportedFormat { magic: String },
    #[error("Malformed PGM header: {message}")]
    MalformedHeader { message: String },
    #[error("PGM pixel data has {actual} bytes, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("Invalid content area dimensions (raster height {height})")]
    InvalidContentArea { height: usize },
}

impl FillError {
    /// Short machine-friendly code used in structured logs.
    pub const fn code(&self) -> &'static str {
        match self {
            FillError::RasterizationFailed { .. } => "rasterization_failed",
            FillError::RasterizerUnavailable { .. } => "rasterizer_unavailable",
            FillError::ScratchDir { .. } => "scratch_dir",
            FillError::NoOutputProduced { .. } => "no_output_produced",
            FillError::ReadOutput { .. } => "read_output",
            FillError::UnsupportedFormat { .. } => "unsupported_format",
            FillError::MalformedHeader { .. } => "malformed_header",
            FillError::PixelCountMismatch { .. } => "pixel_count_mismatch",
            FillError::InvalidContentArea { .. } => "invalid_content_area",
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        FillError::MalformedHeader {
            message: message.into(),
        }
    }
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit {code}"),
        None => "killed by signal".to_string(),
    }
}

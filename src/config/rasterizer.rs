use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{checker::DEFAULT_PDFTOPPM_PROGRAM, lib::errors::ConfigError};

/// External rasterizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizerSection {
    pub program: PathBuf,
}

impl Default for RasterizerSection {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PDFTOPPM_PROGRAM),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRasterizerSection {
    pub program: Option<PathBuf>,
}

pub fn parse_rasterizer_section(
    raw: Option<RawRasterizerSection>,
    path: &Path,
) -> Result<RasterizerSection, ConfigError> {
    let rasterizer_raw = raw.unwrap_or_default();
    let program = rasterizer_raw
        .program
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PDFTOPPM_PROGRAM));
    validate_program(&program, path)?;
    Ok(RasterizerSection { program })
}

fn validate_program(program: &Path, path: &Path) -> Result<(), ConfigError> {
    if program.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "rasterizer.program",
            message: "Provide a program name on PATH or a path to pdftoppm".into(),
        });
    }
    Ok(())
}

use std::path::Path;

use serde::Deserialize;

use crate::{lib::errors::ConfigError, report::DEFAULT_MIN_FILL_PCT};

/// Threshold settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSection {
    pub min_fill_pct: u8,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            min_fill_pct: DEFAULT_MIN_FILL_PCT,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCheckSection {
    pub min_fill_pct: Option<i64>,
}

pub fn parse_check_section(
    raw: Option<RawCheckSection>,
    path: &Path,
) -> Result<CheckSection, ConfigError> {
    let check_raw = raw.unwrap_or_default();
    let min_fill_pct = match check_raw.min_fill_pct {
        None => DEFAULT_MIN_FILL_PCT,
        Some(value) => validate_min_fill(value, path)?,
    };
    Ok(CheckSection { min_fill_pct })
}

fn validate_min_fill(value: i64, path: &Path) -> Result<u8, ConfigError> {
    match u8::try_from(value) {
        Ok(pct) if pct <= 100 => Ok(pct),
        _ => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "check.min_fill_pct",
            message: format!("Use a percentage in the range 0-100 (got {value})"),
        }),
    }
}

//! CLI argument definitions and `CheckProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_path, CheckMode, CheckProfile};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Check that a poster PDF's content band is filled",
    long_about = "Render page 1 of a poster PDF with pdftoppm and report the percentage of \
                  content-band rows that carry visible ink.\n\nExit codes (single file): 0 pass, \
                  1 below threshold, 2 error.\nExit codes (--all): 0 all pass or none found, \
                  1 any poster below threshold or failed.",
    after_help = "Hint: `poster-fill --all build/ 80` checks every *-poster.pdf in build/ against an 80% threshold."
)]
pub struct CheckArgs {
    /// Check every `*-poster.pdf` in TARGET instead of a single file.
    #[arg(long, default_value_t = false)]
    pub all: bool,
    /// Poster PDF, or a directory when `--all` is given.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,
    /// Minimum fill percentage (defaults to check.min_fill_pct, or 85).
    #[arg(value_name = "MIN_FILL_PCT", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_fill_pct: Option<u8>,
    /// Path to poster-fill.toml (overrides POSTER_FILL_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

impl CheckArgs {
    /// Build a `CheckProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> Result<CheckProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        let mode = if self.all {
            CheckMode::Batch(self.target)
        } else {
            CheckMode::Single(self.target)
        };

        Ok(CheckProfile {
            mode,
            min_fill_pct: self.min_fill_pct,
            config_path,
            config_source,
        })
    }
}

//! CLI entrypoint module structure.
use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::{
    checker::{FillPolicy, PdftoppmRasterizer},
    config::CheckerConfig,
    report::{run_batch, run_single},
};

pub mod args;
pub mod profile;

pub use args::CheckArgs;
pub use profile::{resolve_config_path, CheckMode, CheckProfile};

/// Run the requested check, printing status lines to stdout, and return the
/// process exit code.
pub async fn execute_check(profile: &CheckProfile, config: &CheckerConfig) -> Result<u8> {
    let rasterizer = PdftoppmRasterizer::new(&config.rasterizer.program);
    let min_fill_pct = profile.effective_min_fill(config);
    let policy = FillPolicy::default();

    info!(
        target: "poster_fill::cli",
        mode = profile.mode.as_str(),
        target_path = %profile.mode.target().display(),
        min_fill_pct,
        "Running fill check"
    );

    let mut stdout = io::stdout().lock();
    let exit_code = match &profile.mode {
        CheckMode::Single(pdf_path) => {
            run_single(&rasterizer, pdf_path, min_fill_pct, &policy, &mut stdout)
                .await?
                .exit_code()
        }
        CheckMode::Batch(dir) => {
            run_batch(&rasterizer, dir, min_fill_pct, &policy, &mut stdout)
                .await?
                .exit_code()
        }
    };
    stdout.flush()?;
    Ok(exit_code)
}

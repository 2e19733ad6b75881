use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    checker::{check_fill, FillPolicy, Rasterizer},
    lib::fs::list_poster_files,
};

use super::{CheckOutcome, Verdict};

/// Counts accumulated over one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub checked: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, verdict: Verdict) {
        self.checked += 1;
        if verdict != Verdict::Pass {
            self.failed += 1;
        }
    }

    /// Zero matches is a pass; any error or under-filled poster fails the batch.
    pub const fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }

    pub fn summary_line(&self, min_fill_pct: u8) -> String {
        if self.checked == 0 {
            "No poster PDFs found.".to_string()
        } else if self.failed > 0 {
            format!(
                "{}/{} poster(s) below {min_fill_pct}% fill threshold.",
                self.failed, self.checked
            )
        } else {
            format!(
                "All {} poster(s) pass fill check (>= {min_fill_pct}%).",
                self.checked
            )
        }
    }
}

/// Check every `*-poster.pdf` in `dir` in name order, one status line each,
/// followed by the summary line.
///
/// A failing poster does not stop the run.
pub async fn run_batch<R: Rasterizer>(
    rasterizer: &R,
    dir: &Path,
    min_fill_pct: u8,
    policy: &FillPolicy,
    out: &mut impl Write,
) -> Result<BatchSummary> {
    let names = list_poster_files(dir)
        .await
        .with_context(|| format!("failed to list poster directory {}", dir.display()))?;

    info!(
        target: "poster_fill::batch",
        dir = %dir.display(),
        matched = names.len(),
        min_fill_pct,
        "Starting batch fill check"
    );

    let mut summary = BatchSummary::default();
    for name in names {
        let result = check_fill(rasterizer, &dir.join(&name), policy).await;
        let outcome = CheckOutcome::new(name.to_string_lossy(), result);
        summary.record(outcome.verdict(min_fill_pct));
        writeln!(out, "{}", outcome.batch_line(min_fill_pct))
            .context("failed to write status line")?;
    }

    writeln!(out, "{}", summary.summary_line(min_fill_pct))
        .context("failed to write summary line")?;
    Ok(summary)
}

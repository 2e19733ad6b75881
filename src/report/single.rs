use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::checker::{check_fill, FillPolicy, Rasterizer};

use super::{CheckOutcome, Verdict};

/// Check one poster, print its status line, and return the verdict.
pub async fn run_single<R: Rasterizer>(
    rasterizer: &R,
    pdf_path: &Path,
    min_fill_pct: u8,
    policy: &FillPolicy,
    out: &mut impl Write,
) -> Result<Verdict> {
    let file_name = pdf_path
        .file_name()
        .unwrap_or(pdf_path.as_os_str())
        .to_string_lossy()
        .into_owned();
    let outcome = CheckOutcome::new(file_name, check_fill(rasterizer, pdf_path, policy).await);

    writeln!(out, "{}", outcome.single_line(min_fill_pct))
        .context("failed to write status line")?;
    Ok(outcome.verdict(min_fill_pct))
}

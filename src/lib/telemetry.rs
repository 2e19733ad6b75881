//! Telemetry initialization and per-check span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and send developer logs to stderr.
///
/// Status lines own stdout, so the default filter stays at `warn`.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one fill check.
pub struct CheckSpan {
    span: Span,
    started_at: Instant,
    check_id: Uuid,
}

impl CheckSpan {
    /// Start a check span.
    pub fn start(pdf_path: &Path) -> Self {
        let check_id = Uuid::new_v4();
        let span = info_span!(
            target: "poster_fill::check",
            "fill_check",
            %check_id,
            pdf = %pdf_path.display()
        );
        Self {
            span,
            started_at: Instant::now(),
            check_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording status and the measured fill.
    pub fn finish(self, status: &'static str, fill_pct: Option<f64>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "poster_fill::check",
            check_id = %self.check_id,
            status = status,
            fill_pct = fill_pct,
            elapsed_ms = elapsed_ms,
            "Completed fill check"
        );
    }
}

//! Classifying fill results against a threshold and rendering status lines.
mod batch;
mod single;

use crate::lib::errors::FillError;

pub use batch::{run_batch, BatchSummary};
pub use single::run_single;

/// Threshold used when neither the command line nor the config names one.
pub const DEFAULT_MIN_FILL_PCT: u8 = 85;

/// Pass/fail classification of one checked poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    BelowThreshold,
    Error,
}

impl Verdict {
    /// Process exit code for single-file mode.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::BelowThreshold => 1,
            Verdict::Error => 2,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "OK",
            Verdict::BelowThreshold => "WARN",
            Verdict::Error => "ERROR",
        }
    }
}

/// Result of checking one poster file.
#[derive(Debug)]
pub struct CheckOutcome {
    pub file_name: String,
    pub result: Result<f64, FillError>,
}

impl CheckOutcome {
    pub fn new(file_name: impl Into<String>, result: Result<f64, FillError>) -> Self {
        Self {
            file_name: file_name.into(),
            result,
        }
    }

    pub fn verdict(&self, min_fill_pct: u8) -> Verdict {
        match &self.result {
            Err(_) => Verdict::Error,
            Ok(fill) if *fill >= f64::from(min_fill_pct) => Verdict::Pass,
            Ok(_) => Verdict::BelowThreshold,
        }
    }

    /// Status line printed in single-file mode.
    pub fn single_line(&self, min_fill_pct: u8) -> String {
        let name = &self.file_name;
        match &self.result {
            Err(err) => format!("ERROR: {name}: {err}"),
            Ok(fill) if self.verdict(min_fill_pct) == Verdict::Pass => {
                format!("OK: {name}: {fill:.0}% filled (min {min_fill_pct}%)")
            }
            Ok(fill) => format!("WARN: {name}: {fill:.0}% filled (below {min_fill_pct}% minimum)"),
        }
    }

    /// Indented status line printed per file in batch mode.
    pub fn batch_line(&self, min_fill_pct: u8) -> String {
        let name = &self.file_name;
        match &self.result {
            Err(err) => format!("  ERROR: {name}: {err}"),
            Ok(fill) if self.verdict(min_fill_pct) == Verdict::Pass => {
                format!("  OK: {name} ({fill:.0}% filled)")
            }
            Ok(fill) => format!("  WARN: {name} ({fill:.0}% filled, below {min_fill_pct}%)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_compares_inclusively() {
        assert_eq!(CheckOutcome::new("a", Ok(85.0)).verdict(85), Verdict::Pass);
        assert_eq!(
            CheckOutcome::new("a", Ok(84.99)).verdict(85),
            Verdict::BelowThreshold
        );
        assert_eq!(
            CheckOutcome::new("a", Err(FillError::InvalidContentArea { height: 1 })).verdict(0),
            Verdict::Error
        );
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(Verdict::Pass.exit_code(), 0);
        assert_eq!(Verdict::BelowThreshold.exit_code(), 1);
        assert_eq!(Verdict::Error.exit_code(), 2);
    }

    #[test]
    fn single_lines_round_fill_to_whole_percent() {
        assert_eq!(
            CheckOutcome::new("a-poster.pdf", Ok(91.6)).single_line(85),
            "OK: a-poster.pdf: 92% filled (min 85%)"
        );
        assert_eq!(
            CheckOutcome::new("a-poster.pdf", Ok(40.2)).single_line(85),
            "WARN: a-poster.pdf: 40% filled (below 85% minimum)"
        );
        assert_eq!(
            CheckOutcome::new(
                "a-poster.pdf",
                Err(FillError::UnsupportedFormat {
                    magic: "P6".to_string()
                })
            )
            .single_line(85),
            "ERROR: a-poster.pdf: Unexpected PGM format: P6"
        );
    }

    #[test]
    fn batch_lines_are_indented() {
        assert_eq!(
            CheckOutcome::new("b-poster.pdf", Ok(100.0)).batch_line(85),
            "  OK: b-poster.pdf (100% filled)"
        );
        assert_eq!(
            CheckOutcome::new("b-poster.pdf", Ok(12.0)).batch_line(50),
            "  WARN: b-poster.pdf (12% filled, below 50%)"
        );
    }
}

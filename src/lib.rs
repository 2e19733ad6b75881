//! Library crate root re-exporting the checker, report, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod checker;
pub mod cli;
pub mod config;
pub mod report;

pub use checker::{check_fill, FillPolicy, PdftoppmRasterizer, Rasterizer};
pub use lib::{errors::FillError, pgm::RasterImage};
pub use report::{CheckOutcome, Verdict};

//! Shared library modules providing error types, PGM decoding, file utilities, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod pdftoppm;
pub mod pgm;
pub mod telemetry;

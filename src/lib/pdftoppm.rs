//! Shared helpers for building `pdftoppm` commands.

use std::path::Path;

use tokio::process::Command;

/// Resolution the poster is rendered at.
pub const RENDER_DPI: u32 = 72;
/// Only the first page is inspected.
pub const RENDER_PAGE: u32 = 1;

/// Build a `pdftoppm` command that writes page 1 of `pdf_path` as a grayscale
/// PGM named `<output_prefix>-<page>.pgm`.
pub fn build_pdftoppm_command(program: &Path, pdf_path: &Path, output_prefix: &Path) -> Command {
    let mut command = Command::new(program);
    command.kill_on_drop(true);
    command.arg("-gray");
    command.arg("-r").arg(RENDER_DPI.to_string());
    command.arg("-f").arg(RENDER_PAGE.to_string());
    command.arg("-l").arg(RENDER_PAGE.to_string());
    command.arg(pdf_path);
    command.arg(output_prefix);
    command
}

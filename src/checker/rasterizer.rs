use std::{
    future::Future,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use tokio::fs;
use tracing::{debug, info};

use crate::lib::{
    errors::FillError,
    fs as raster_fs,
    pdftoppm::build_pdftoppm_command,
    pgm::{parse_pgm, RasterImage, PGM_EXTENSION},
};

/// Default rasterizer executable, resolved through `PATH`.
pub const DEFAULT_PDFTOPPM_PROGRAM: &str = "pdftoppm";

const OUTPUT_PREFIX: &str = "page";
const SCRATCH_PREFIX: &str = "poster-fill-";

/// Renders page 1 of a PDF into a grayscale raster.
pub trait Rasterizer {
    fn rasterize(&self, pdf_path: &Path) -> impl Future<Output = Result<RasterImage, FillError>>;
}

/// [`Rasterizer`] backed by poppler's `pdftoppm`.
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    program: PathBuf,
    scratch_root: Option<PathBuf>,
}

impl PdftoppmRasterizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            scratch_root: None,
        }
    }

    /// Create scratch directories under `root` instead of the system temp dir.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for PdftoppmRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_PDFTOPPM_PROGRAM)
    }
}

impl Rasterizer for PdftoppmRasterizer {
    async fn rasterize(&self, pdf_path: &Path) -> Result<RasterImage, FillError> {
        // Dropping `scratch` removes the directory on every return path.
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let scratch = match &self.scratch_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|source| FillError::ScratchDir { source })?;
        let raster_path = self.render_into(pdf_path, &scratch).await?;

        let bytes = fs::read(&raster_path)
            .await
            .map_err(|source| FillError::ReadOutput {
                path: raster_path.clone(),
                source,
            })?;
        parse_pgm(&bytes)
    }
}

impl PdftoppmRasterizer {
    async fn render_into(&self, pdf_path: &Path, scratch: &TempDir) -> Result<PathBuf, FillError> {
        let output_prefix = scratch.path().join(OUTPUT_PREFIX);
        let mut command = build_pdftoppm_command(&self.program, pdf_path, &output_prefix);

        info!(
            target: "poster_fill::rasterizer",
            program = %self.program().display(),
            pdf = %pdf_path.display(),
            "Starting pdftoppm"
        );

        let output = command
            .output()
            .await
            .map_err(|source| FillError::RasterizerUnavailable {
                program: self.program().to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(FillError::RasterizationFailed {
                exit_code: output.status.code(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raster_path = raster_fs::find_file_with_extension(scratch.path(), PGM_EXTENSION)
            .await
            .map_err(|source| FillError::ReadOutput {
                path: scratch.path().to_path_buf(),
                source,
            })?
            .ok_or_else(|| FillError::NoOutputProduced {
                dir: scratch.path().to_path_buf(),
            })?;

        debug!(
            target: "poster_fill::rasterizer",
            raster = %raster_path.display(),
            "pdftoppm produced raster"
        );
        Ok(raster_path)
    }
}

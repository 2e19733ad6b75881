use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::Output,
};

use anyhow::{Context, Result};
use tokio::process::Command;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_poster-fill");

/// Stand-in for `pdftoppm`: treats the "PDF" as a ready-made PGM and copies
/// it to `<prefix>-1.pgm`, or fails like poppler when the name contains `broken`.
const FAKE_PDFTOPPM: &str = r#"#!/bin/sh
input="$8"
prefix="$9"
case "$input" in
  *broken*)
    echo "Syntax Error: Couldn't read xref table" >&2
    exit 1
    ;;
esac
cp "$input" "$prefix-1.pgm"
"#;

/// A workspace with a fake rasterizer and a config file pointing at it.
pub struct Workspace {
    pub root: tempfile::TempDir,
    pub config_path: PathBuf,
}

impl Workspace {
    pub fn new(min_fill_pct: Option<u8>) -> Result<Self> {
        let root = tempfile::tempdir().context("failed to create workspace")?;
        let script = root.path().join("fake-pdftoppm");
        fs::write(&script, FAKE_PDFTOPPM).context("failed to write fake pdftoppm")?;
        let mut permissions = fs::metadata(&script)?.permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&script, permissions)?;

        let mut config = format!("[rasterizer]\nprogram = \"{}\"\n", script.display());
        if let Some(pct) = min_fill_pct {
            config.push_str(&format!("\n[check]\nmin_fill_pct = {pct}\n"));
        }
        let config_path = root.path().join("poster-fill.toml");
        fs::write(&config_path, config).context("failed to write config")?;

        Ok(Self { root, config_path })
    }

    pub fn dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub async fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(BINARY_PATH)
            .env("POSTER_FILL_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .current_dir(self.root.path())
            .args(args)
            .output()
            .await
            .context("failed to run poster-fill")
    }
}

/// Write a 10x100 poster "PDF" whose rows `0..filled_rows` are black.
pub fn write_poster(dir: &Path, name: &str, filled_rows: usize) -> Result<PathBuf> {
    let (width, height) = (10, 100);
    let mut bytes = format!("P5\n# fake poster\n{width} {height}\n255\n").into_bytes();
    for row in 0..height {
        let sample = if row < filled_rows { 0u8 } else { 255u8 };
        bytes.extend(std::iter::repeat(sample).take(width));
    }
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

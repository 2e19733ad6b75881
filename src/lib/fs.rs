//! Directory scanning helpers for raster output and poster batches.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use tokio::fs;

/// File name suffix identifying poster PDFs in batch mode.
pub const POSTER_SUFFIX: &str = "-poster.pdf";

/// Return the first file in `dir` (by name) whose extension is `extension`.
pub async fn find_file_with_extension(dir: &Path, extension: &str) -> io::Result<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut matches = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches.into_iter().next())
}

/// List file names in `dir` ending with [`POSTER_SUFFIX`], sorted lexicographically.
///
/// Names need not be valid UTF-8; only the ASCII suffix is matched.
pub async fn list_poster_files(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if has_poster_suffix(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(unix)]
fn has_poster_suffix(name: &std::ffi::OsStr) -> bool {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes().ends_with(POSTER_SUFFIX.as_bytes())
}

#[cfg(not(unix))]
fn has_poster_suffix(name: &std::ffi::OsStr) -> bool {
    // Lossy decoding never folds ASCII bytes into a replacement character.
    name.to_string_lossy().ends_with(POSTER_SUFFIX)
}

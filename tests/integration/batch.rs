use anyhow::Result;

use crate::common::{stdout_of, write_poster, Workspace};

#[tokio::test]
async fn empty_directory_passes_distinctly() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    write_poster(&posters, "handout.pdf", 0)?;

    let output = workspace
        .run(&["--all", posters.to_str().expect("utf-8 path")])
        .await?;

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(stdout_of(&output), "No poster PDFs found.\n");
    Ok(())
}

#[tokio::test]
async fn mixed_batch_reports_every_file_and_fails() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    write_poster(&posters, "c-poster.pdf", 100)?;
    write_poster(&posters, "a-broken-poster.pdf", 100)?;
    write_poster(&posters, "b-poster.pdf", 30)?;

    let output = workspace
        .run(&["--all", posters.to_str().expect("utf-8 path")])
        .await?;
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(
        lines[0].starts_with("  ERROR: a-broken-poster.pdf: pdftoppm failed"),
        "{stdout}"
    );
    assert_eq!(lines[1], "  WARN: b-poster.pdf (19% filled, below 85%)");
    assert_eq!(lines[2], "  OK: c-poster.pdf (100% filled)");
    assert_eq!(lines[3], "2/3 poster(s) below 85% fill threshold.");
    Ok(())
}

#[tokio::test]
async fn passing_batch_with_custom_threshold() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    write_poster(&posters, "a-poster.pdf", 100)?;
    write_poster(&posters, "b-poster.pdf", 30)?;

    let output = workspace
        .run(&["--all", posters.to_str().expect("utf-8 path"), "15"])
        .await?;

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(
        stdout_of(&output),
        "  OK: a-poster.pdf (100% filled)\n  OK: b-poster.pdf (19% filled)\nAll 2 poster(s) pass fill check (>= 15%).\n"
    );
    Ok(())
}

#[tokio::test]
async fn missing_directory_is_fatal() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let missing = workspace.root.path().join("nowhere");

    let output = workspace
        .run(&["--all", missing.to_str().expect("utf-8 path")])
        .await?;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to list poster directory"));
    Ok(())
}

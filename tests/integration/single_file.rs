use anyhow::Result;

use crate::common::{stdout_of, write_poster, Workspace};

#[tokio::test]
async fn full_poster_passes_with_exit_zero() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    let pdf = write_poster(&posters, "full-poster.pdf", 100)?;

    let output = workspace.run(&[pdf.to_str().expect("utf-8 path")]).await?;

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(
        stdout_of(&output),
        "OK: full-poster.pdf: 100% filled (min 85%)\n"
    );
    Ok(())
}

#[tokio::test]
async fn sparse_poster_warns_with_exit_one() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    let pdf = write_poster(&posters, "sparse-poster.pdf", 30)?;

    let output = workspace.run(&[pdf.to_str().expect("utf-8 path")]).await?;

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert_eq!(
        stdout_of(&output),
        "WARN: sparse-poster.pdf: 19% filled (below 85% minimum)\n"
    );
    Ok(())
}

#[tokio::test]
async fn command_line_threshold_overrides_config() -> Result<()> {
    let workspace = Workspace::new(Some(95))?;
    let posters = workspace.dir("out")?;
    let pdf = write_poster(&posters, "sparse-poster.pdf", 30)?;
    let path = pdf.to_str().expect("utf-8 path");

    let strict = workspace.run(&[path]).await?;
    let lenient = workspace.run(&[path, "10"]).await?;

    assert_eq!(strict.status.code(), Some(1), "{strict:?}");
    assert!(stdout_of(&strict).contains("below 95% minimum"));
    assert_eq!(lenient.status.code(), Some(0), "{lenient:?}");
    assert_eq!(
        stdout_of(&lenient),
        "OK: sparse-poster.pdf: 19% filled (min 10%)\n"
    );
    Ok(())
}

#[tokio::test]
async fn rasterizer_failure_exits_two() -> Result<()> {
    let workspace = Workspace::new(None)?;
    let posters = workspace.dir("out")?;
    let pdf = write_poster(&posters, "broken-poster.pdf", 100)?;

    let output = workspace.run(&[pdf.to_str().expect("utf-8 path")]).await?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(
        stdout.starts_with("ERROR: broken-poster.pdf: pdftoppm failed"),
        "{stdout}"
    );
    assert!(stdout.contains("Couldn't read xref table"), "{stdout}");
    Ok(())
}

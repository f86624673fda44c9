use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write the rendered markdown report. The target directory must already
/// exist; a missing directory fails the run.
pub async fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_report_contents() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("REPORT.md");

        write_report(&path, "# Report\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("docs").join("REPORT.md");

        assert!(write_report(&path, "# Report\n").await.is_err());
    }
}

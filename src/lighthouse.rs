use crate::models::{Mode, Report};
use log::warn;
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// The four categories requested from every audit, in display order.
pub const CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read report {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("report {path} is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a Lighthouse JSON report and reduce it to integer category scores.
///
/// Categories without a `score` field are omitted; a null score counts as 0;
/// otherwise the 0-1 value is scaled to 0-100 and rounded to nearest.
pub async fn extract_scores(path: impl AsRef<Path>) -> Result<HashMap<String, u32>, ExtractError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExtractError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let report: Report = serde_json::from_str(&raw).map_err(|source| ExtractError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    let scores = report
        .categories
        .into_iter()
        .filter_map(|(name, category)| category.percent().map(|percent| (name, percent)))
        .collect();
    Ok(scores)
}

/// Invoke the lighthouse CLI for one mode.
///
/// The exit status is not a gate: a failed audit is logged and the run
/// continues, so the subsequent JSON read reports the actual failure.
pub fn run_lighthouse(mode: Mode, base_url: &str) {
    let url = mode.url(base_url);

    let result = Command::new("lighthouse")
        .arg(&url)
        .arg("--output=json")
        .arg("--output-path")
        .arg(format!("./{}", mode.json_path()))
        .arg("--chrome-flags=--headless")
        .arg(format!("--only-categories={}", CATEGORIES.join(",")))
        .arg("--quiet")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|child| child.wait_with_output());

    match result {
        Ok(output) if !output.status.success() => {
            warn!(
                "lighthouse exited with {} for {}: {}",
                output.status,
                url,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(_) => {}
        Err(err) => warn!("failed to invoke lighthouse for {}: {}", url, err),
    }
}

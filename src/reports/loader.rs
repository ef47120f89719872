//! Startup-time enumeration and parsing of the report collection.
//!
//! The reports directory is resolved once per load into an in-memory
//! snapshot; nothing rescans the filesystem while rendering. Documents that
//! fail to read or parse are skipped and counted so one bad file cannot
//! take down the rest of the dashboard.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::reports::model::{EvaluationDocument, Report};

/// Errors that prevent loading the collection as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The reports directory itself could not be enumerated.
    #[error("Failed to read reports directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of one load pass over the reports directory.
#[derive(Clone, Debug, Default)]
pub struct LoadOutcome {
    /// Reports sorted newest-first.
    pub reports: Vec<Report>,
    /// Documents skipped because they failed to read or parse.
    pub skipped: usize,
}

#[derive(Debug, Error)]
enum DocumentError {
    #[error("unreadable file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load every `*.json` document under `dir` into memory, newest first.
///
/// The sort is stable and keys on `timestamp` descending, with an absent
/// timestamp treated as 0. Enumeration order is fixed by sorting paths
/// first, so equal timestamps keep a reproducible tie order across runs.
pub fn load_reports(dir: &Path) -> Result<LoadOutcome, LoadError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    paths.sort();

    let mut outcome = LoadOutcome::default();
    for path in paths {
        match read_document(&path) {
            Ok(data) => outcome.reports.push(Report {
                name: display_name(&path),
                path,
                data,
            }),
            Err(err) => {
                warn!("Skipping report {}: {err}", path.display());
                outcome.skipped += 1;
            }
        }
    }
    sort_newest_first(&mut outcome.reports);

    info!(
        "Loaded {} reports from {} ({} skipped)",
        outcome.reports.len(),
        dir.display(),
        outcome.skipped
    );
    Ok(outcome)
}

fn read_document(path: &Path) -> Result<EvaluationDocument, DocumentError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Final path segment, used as the display label and filter key.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn sort_newest_first(reports: &mut [Report]) {
    // Stable sort keeps tie order reproducible for equal timestamps.
    reports.sort_by(|a, b| b.data.timestamp.total_cmp(&a.data.timestamp));
}

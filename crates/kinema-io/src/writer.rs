//! JSON report writer for match results.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use kinema_match::MatchReport;

use crate::IoError;

/// Writes match reports to JSON files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{clip}_match.json`.
pub struct ReportWriter {
    output_dir: PathBuf,
}

#[derive(Serialize)]
struct MatchArtifact<'a> {
    clip: &'a str,
    metric: &'a str,
    n_queries: usize,
    matches: Vec<MatchEntry>,
}

#[derive(Serialize)]
struct MatchEntry {
    pose: usize,
    score: f64,
    trajectory: Vec<f64>,
}

impl ReportWriter {
    /// Create a new writer targeting the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display()))]
    pub fn new(output_dir: &Path) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Write a match report to `{clip}_match.json`, returning the path.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_report(&self, report: &MatchReport) -> Result<PathBuf, IoError> {
        let path = self
            .output_dir
            .join(format!("{}_match.json", report.clip.as_str()));

        let matches: Vec<MatchEntry> = report
            .matches
            .iter()
            .map(|m| MatchEntry {
                pose: m.pose.index(),
                score: m.score.value(),
                trajectory: m.trajectory.as_ref().to_vec(),
            })
            .collect();

        let artifact = MatchArtifact {
            clip: report.clip.as_str(),
            metric: report.metric.name(),
            n_queries: matches.len(),
            matches,
        };

        let json = serde_json::to_string_pretty(&artifact).expect("serialization cannot fail");
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "match report written");
        Ok(path)
    }
}

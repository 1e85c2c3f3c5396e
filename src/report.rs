// src/report.rs

use crate::pipeline::RunSummary;
use crate::utils::error::ReportError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Metadata about one consolidation run, written as a JSON sidecar next to
/// the output PDF.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub input_dir: String,
    pub output_file: String,
    pub classifier: String,
    pub files_processed: usize,
    pub pages_scanned: usize,
    pub pages_extracted: usize,
    pub generated_at: String,
}

impl RunReport {
    pub fn new(
        input_dir: &Path,
        output_file: &Path,
        classifier: &str,
        summary: &RunSummary,
    ) -> Self {
        Self {
            input_dir: input_dir.display().to_string(),
            output_file: output_file.display().to_string(),
            classifier: classifier.to_string(),
            files_processed: summary.files_processed,
            pages_scanned: summary.pages_scanned,
            pages_extracted: summary.pages_extracted,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Writes the report next to the output PDF, with the same stem and a
    /// `.json` extension.
    pub fn save_alongside(&self, output_file: &Path) -> Result<PathBuf, ReportError> {
        let path = output_file.with_extension("json");

        let report_str = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        std::fs::write(&path, report_str)?;

        tracing::info!("Saved run report to {}", path.display());
        Ok(path)
    }
}

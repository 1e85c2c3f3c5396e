// src/pipeline.rs

use crate::classify::Classifier;
use crate::pdf::{list_pdf_files, ConsolidatedWriter, NewspaperPdf};
use crate::utils::AppError;
use std::path::Path;

/// Counters for one consolidation run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub files_processed: usize,
    pub pages_scanned: usize,
    pub pages_extracted: usize,
}

/// Scans every PDF in `input_dir` (sorted by file name), classifies each
/// page, and writes the matching pages to `output_file` in (file, page)
/// encounter order.
///
/// A classification failure only excludes that page; an unreadable folder
/// or source PDF aborts the run.
pub async fn consolidate(
    input_dir: &Path,
    output_file: &Path,
    classifier: &Classifier,
) -> Result<RunSummary, AppError> {
    let pdf_files = list_pdf_files(input_dir)?;
    tracing::info!("Found {} PDF file(s) in {}", pdf_files.len(), input_dir.display());

    let mut writer = ConsolidatedWriter::new();
    let mut summary = RunSummary::default();

    for path in pdf_files {
        tracing::info!("Processing: {}", path.display());
        let source = NewspaperPdf::open(&path)?;

        let mut selected = Vec::new();
        for page_number in source.page_numbers() {
            summary.pages_scanned += 1;
            let text = source.page_text(page_number)?;

            let editorial = match classifier.is_editorial(&text).await {
                Ok(flag) => flag,
                Err(e) => {
                    tracing::error!(
                        "Classification failed for {} page {}: {}",
                        path.display(),
                        page_number,
                        e
                    );
                    false
                }
            };

            if editorial {
                tracing::info!("  -> extracting page {}", page_number);
                selected.push(page_number);
            }
        }

        if !selected.is_empty() {
            writer.append_pages(source.into_document(), &selected)?;
        }
        summary.files_processed += 1;
    }

    summary.pages_extracted = writer.page_count();
    writer.finalize(output_file)?;
    tracing::info!("Consolidated file created: {}", output_file.display());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::KeywordClassifier;
    use crate::pdf::testutil::sample_document;
    use lopdf::Document;
    use std::path::PathBuf;

    fn write_issue(dir: &Path, name: &str, page_texts: &[&str]) -> PathBuf {
        let path = dir.join(name);
        sample_document(page_texts).save(&path).unwrap();
        path
    }

    fn keyword_classifier() -> Classifier {
        Classifier::Keyword(KeywordClassifier::new())
    }

    #[tokio::test]
    async fn extracts_matching_pages_in_encounter_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("editorials.pdf");

        // File order is by name: a_herald.pdf before b_tribune.pdf.
        write_issue(
            dir.path(),
            "b_tribune.pdf",
            &["Tribune weather forecast", "Tribune editorial on taxes"],
        );
        write_issue(
            dir.path(),
            "a_herald.pdf",
            &[
                "Herald opinion piece on schools",
                "Herald classified ads",
                "Herald letters to the editor",
            ],
        );

        let summary = consolidate(dir.path(), &out, &keyword_classifier())
            .await
            .unwrap();

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.pages_scanned, 5);
        assert_eq!(summary.pages_extracted, 3);

        let output = Document::load(&out).unwrap();
        assert_eq!(output.get_pages().len(), 3);
        assert!(output.extract_text(&[1]).unwrap().contains("Herald opinion"));
        assert!(output.extract_text(&[2]).unwrap().contains("letters to the editor"));
        assert!(output.extract_text(&[3]).unwrap().contains("Tribune editorial"));
    }

    #[tokio::test]
    async fn empty_folder_yields_empty_output_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("editorials.pdf");

        let summary = consolidate(dir.path(), &out, &keyword_classifier())
            .await
            .unwrap();

        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.pages_extracted, 0);

        let output = Document::load(&out).unwrap();
        assert_eq!(output.get_pages().len(), 0);
    }

    #[tokio::test]
    async fn no_matching_pages_yields_empty_output_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("editorials.pdf");
        write_issue(dir.path(), "sports.pdf", &["League standings", "Match report"]);

        let summary = consolidate(dir.path(), &out, &keyword_classifier())
            .await
            .unwrap();

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.pages_scanned, 2);
        assert_eq!(summary.pages_extracted, 0);
        assert_eq!(Document::load(&out).unwrap().get_pages().len(), 0);
    }

    #[tokio::test]
    async fn missing_input_folder_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("editorials.pdf");
        let missing = dir.path().join("no_such_folder");

        let result = consolidate(&missing, &out, &keyword_classifier()).await;
        assert!(result.is_err());
    }
}

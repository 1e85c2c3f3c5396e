// src/pdf/reader.rs

use crate::utils::error::PdfError;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Lists the `.pdf` files directly inside `dir`, sorted by file name so a
/// run always visits sources in the same order.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>, PdfError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// A loaded source newspaper issue.
pub struct NewspaperPdf {
    doc: Document,
}

impl NewspaperPdf {
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let doc = Document::load(path)?;
        Ok(Self { doc })
    }

    /// 1-based page numbers in document order.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extracts the text content of one page.
    pub fn page_text(&self, page_number: u32) -> Result<String, PdfError> {
        Ok(self.doc.extract_text(&[page_number])?)
    }

    /// Hands the underlying document over, e.g. to the consolidation
    /// writer once the pages to keep are known.
    pub fn into_document(self) -> Document {
        self.doc
    }
}

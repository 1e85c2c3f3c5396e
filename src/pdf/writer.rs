// src/pdf/writer.rs

use crate::utils::error::PdfError;
use lopdf::{dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Accumulates single pages copied out of source documents and writes them
/// once as a consolidated PDF. Pages keep their append order.
pub struct ConsolidatedWriter {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl ConsolidatedWriter {
    pub fn new() -> Self {
        Self {
            doc: Document::with_version("1.5"),
            page_ids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Copies the given pages (1-based numbers, in the given order) out of
    /// `source` into the consolidated document.
    ///
    /// The source's objects are renumbered past the writer's current id
    /// range, then carried over wholesale except for its catalog and page
    /// tree, which are rebuilt by `finalize`. Unselected pages are left
    /// out of the tree.
    pub fn append_pages(&mut self, mut source: Document, page_numbers: &[u32]) -> Result<(), PdfError> {
        source.renumber_objects_with(self.doc.max_id + 1);
        self.doc.max_id = source.max_id;

        let page_map = source.get_pages();
        let mut selected = Vec::with_capacity(page_numbers.len());
        for &number in page_numbers {
            let id = page_map
                .get(&number)
                .copied()
                .ok_or(PdfError::PageOutOfRange(number))?;
            selected.push(id);
        }

        for (object_id, object) in source.objects.into_iter() {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" | b"Pages" | b"Outlines" | b"Outline" => {}
                b"Page" => {
                    if selected.contains(&object_id) {
                        self.doc.objects.insert(object_id, object);
                    }
                }
                _ => {
                    self.doc.objects.insert(object_id, object);
                }
            }
        }

        self.page_ids.extend(selected);
        Ok(())
    }

    /// Builds the page tree and catalog over the appended pages and saves
    /// the document. Zero appended pages produce a valid empty PDF.
    pub fn finalize(mut self, path: &Path) -> Result<usize, PdfError> {
        let pages_id = self.doc.new_object_id();

        for &page_id in &self.page_ids {
            if let Ok(Object::Dictionary(page)) = self.doc.get_object_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| id.into()).collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        self.doc.renumber_objects();
        self.doc.compress();
        self.doc.save(path)?;

        Ok(self.page_ids.len())
    }
}

impl Default for ConsolidatedWriter {
    fn default() -> Self {
        Self::new()
    }
}

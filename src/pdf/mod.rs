// src/pdf/mod.rs
pub mod reader;
pub mod writer;

pub use reader::{list_pdf_files, NewspaperPdf};
pub use writer::ConsolidatedWriter;

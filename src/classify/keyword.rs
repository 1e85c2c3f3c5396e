// src/classify/keyword.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Pattern for Text Matching (Lazy Static) ---
// Fixed editorial vocabulary; whole-word, case-insensitive. Covers the
// section labels and bylines newspapers put on opinion pages.
static EDITORIAL_KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:editorials?|op[-\s]?ed|opinions?|letters?\s+to\s+the\s+editor|commentary|columnists?|viewpoints?|our\s+view|guest\s+column)\b",
    )
    .expect("Failed to compile EDITORIAL_KEYWORDS_RE")
});

/// Local page classifier: a page is editorial when its text contains any
/// word of a fixed vocabulary. Pure function of the input text, so the
/// same text always classifies the same way.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn is_editorial(&self, text: &str) -> bool {
        EDITORIAL_KEYWORDS_RE.is_match(text)
    }
}

// src/classify/mod.rs
pub mod keyword;
pub mod llm;

pub use keyword::KeywordClassifier;
pub use llm::LlmClassifier;

use crate::utils::error::GroqError;

/// The two page-classification strategies behind one entry point, so the
/// pipeline does not care which one is in use.
pub enum Classifier {
    Keyword(KeywordClassifier),
    Llm(LlmClassifier),
}

impl Classifier {
    pub async fn is_editorial(&self, text: &str) -> Result<bool, GroqError> {
        match self {
            Classifier::Keyword(classifier) => Ok(classifier.is_editorial(text)),
            Classifier::Llm(classifier) => classifier.is_editorial(text).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Keyword(_) => "keyword",
            Classifier::Llm(_) => "llm",
        }
    }
}

// src/main.rs
mod classify;
mod groq;
mod pdf;
mod pipeline;
mod report;
mod utils;

use clap::{Parser, ValueEnum};
use classify::{Classifier, KeywordClassifier, LlmClassifier};
use report::RunReport;
use std::path::Path;
use utils::AppError;

/// Command Line Interface for the editorial page extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder containing the newspaper PDF files
    #[arg(short, long, default_value = "newspapers")]
    input_dir: String,

    /// Path of the consolidated output PDF
    #[arg(short, long, default_value = "editorials.pdf")]
    output: String,

    /// Page classification strategy
    #[arg(long, value_enum, default_value = "keyword")]
    classifier: ClassifierKind,

    /// Model used by the LLM classifier (requires GROQ_API_KEY)
    #[arg(long, default_value = "llama-3.1-8b-instant")]
    model: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassifierKind {
    /// Match page text against a fixed editorial vocabulary
    Keyword,
    /// Ask a hosted language model for a YES/NO verdict per page
    Llm,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Build the requested classifier
    let classifier = match args.classifier {
        ClassifierKind::Keyword => Classifier::Keyword(KeywordClassifier::new()),
        ClassifierKind::Llm => {
            let llm = LlmClassifier::from_env(&args.model)?;
            tracing::info!("Using LLM classifier with model: {}", llm.model());
            Classifier::Llm(llm)
        }
    };

    // 4. Scan, classify, and consolidate
    let input_dir = Path::new(&args.input_dir);
    let output_file = Path::new(&args.output);
    let summary = pipeline::consolidate(input_dir, output_file, &classifier).await?;

    // 5. Write the run report next to the output PDF
    let report = RunReport::new(input_dir, output_file, classifier.name(), &summary);
    match report.save_alongside(output_file) {
        Ok(path) => tracing::info!("Run report written to: {}", path.display()),
        Err(e) => tracing::error!("Failed to write run report: {}", e),
    }

    tracing::info!(
        "Processing finished. Files: {}, pages scanned: {}, pages extracted: {}",
        summary.files_processed,
        summary.pages_scanned,
        summary.pages_extracted
    );

    Ok(())
}

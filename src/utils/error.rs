// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum GroqError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 401 Unauthorized, 503 Service Unavailable

    #[error("Groq rate limit exceeded")]
    RateLimited, // 429 from the completions endpoint

    #[error("GROQ_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Page {0} does not exist in the source document")]
    PageOutOfRange(u32),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Groq interaction failed: {0}")]
    Groq(#[from] GroqError), // Automatically convert Groq errors

    #[error("PDF processing failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

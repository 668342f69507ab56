//! Error types for PDF extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a PDF into a transcript
#[derive(Error, Debug)]
pub enum PdfError {
    /// Source file does not exist
    #[error("PDF file not found at {}", .0.display())]
    NotFound(PathBuf),

    /// Document could not be parsed
    #[error("Failed to load PDF: {0}")]
    Parse(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

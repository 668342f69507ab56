//! Error types for the analysis stage

use blackstone_llm::LlmError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Transcript file does not exist
    #[error("Transcript not found at {}. Run the extract stage first.", .0.display())]
    MissingTranscript(PathBuf),

    /// Transcript holds no text at all
    #[error("Transcript is empty; nothing to analyze")]
    EmptyTranscript,

    /// Provider-level fault (transport, auth, quota, bad body)
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Response body was not valid JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    /// Response JSON parsed but does not match the report shape
    #[error("Response does not match the report shape: {0}")]
    InvalidReport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

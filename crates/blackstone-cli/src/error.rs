//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API credential absent from the environment
    #[error("OPENROUTER_API_KEY not set. Add it to your environment or .env file.")]
    MissingApiKey,

    /// Extraction stage error
    #[error("Extraction failed: {0}")]
    Pdf(#[from] blackstone_pdf::PdfError),

    /// Analysis stage error
    #[error("Analysis failed: {0}")]
    Analyzer(#[from] blackstone_analyzer::AnalyzerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

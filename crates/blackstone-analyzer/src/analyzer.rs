//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use crate::validator::validate_report;
use blackstone_domain::Transcript;
use blackstone_llm::{ChatMessage, ChatProvider, ChatRequest};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// The Analyzer turns a transcript into a report JSON object
///
/// Holds the provider and configuration for exactly one run; construct it
/// at process entry, use it for the single call, and drop it at exit.
pub struct Analyzer<P>
where
    P: ChatProvider,
{
    provider: P,
    config: AnalyzerConfig,
}

impl<P> Analyzer<P>
where
    P: ChatProvider,
{
    /// Create a new Analyzer, validating the configuration up front
    pub fn new(provider: P, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self { provider, config })
    }

    /// Analyze a transcript already in memory.
    ///
    /// Makes the single provider call, parses the body as JSON, and (in
    /// strict mode) validates the report shape before returning it.
    pub async fn analyze(&self, transcript: &Transcript) -> Result<Value, AnalyzerError> {
        if transcript.is_empty() {
            return Err(AnalyzerError::EmptyTranscript);
        }

        info!(
            "Starting analysis: {} pages, {} chars, model '{}'",
            transcript.page_count(),
            transcript.as_str().len(),
            self.config.model
        );

        let builder = PromptBuilder::new(transcript);
        let request = ChatRequest::new(&self.config.model)
            .with_max_tokens(self.config.max_tokens)
            .message(ChatMessage::system(builder.build_system()))
            .message(ChatMessage::user(builder.build_user()));

        let response = self.provider.complete(&request).await?;
        debug!("Response length: {} chars", response.len());

        let report = parse_response(&response)?;

        if self.config.strict {
            validate_report(&report).map_err(|violations| {
                AnalyzerError::InvalidReport(
                    violations
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; "),
                )
            })?;
        }

        info!("Analysis complete");
        Ok(report)
    }

    /// Analyze the transcript stored at `path`.
    ///
    /// The file must exist before any network activity happens; a missing
    /// or empty transcript aborts the run without a provider call.
    pub async fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Value, AnalyzerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnalyzerError::MissingTranscript(path.to_path_buf()));
        }

        let transcript = Transcript::load(path)?;
        self.analyze(&transcript).await
    }
}

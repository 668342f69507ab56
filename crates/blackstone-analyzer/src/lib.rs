//! Blackstone Analyzer
//!
//! Turns a transcript into a structured compliance report by way of a single
//! chat-completion call.
//!
//! # Architecture
//!
//! ```text
//! Transcript → PromptBuilder → ChatProvider → parse → validate → report JSON
//! ```
//!
//! The analyzer makes exactly one remote call per run: no retry, no
//! chunking, no streaming. Every fault is terminal for the invocation and
//! surfaces as a typed [`AnalyzerError`].
//!
//! # Example
//!
//! ```
//! use blackstone_analyzer::{Analyzer, AnalyzerConfig};
//! use blackstone_domain::Transcript;
//! use blackstone_llm::MockProvider;
//!
//! # async fn example() -> Result<(), blackstone_analyzer::AnalyzerError> {
//! let provider = MockProvider::new(r#"{"summary": ["one"]}"#);
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::permissive())?;
//!
//! let transcript = Transcript::new("--- PAGE 1 ---\nSection 1. Short title.");
//! let report = analyzer.analyze(&transcript).await?;
//! assert_eq!(report["summary"][0], "one");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod persist;
mod prompt;
mod validator;


pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, DEFAULT_MODEL};
pub use error::AnalyzerError;
pub use parser::parse_response;
pub use persist::{to_pretty_json, write_report};
pub use prompt::PromptBuilder;
pub use validator::{validate_report, ShapeViolation};

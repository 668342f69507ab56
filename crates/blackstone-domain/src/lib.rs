//! Blackstone Domain Layer
//!
//! This crate contains the core data model shared by every stage of the
//! pipeline. It defines the fundamental artifacts and the fixed analysis
//! contract that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Transcript**: cleaned plain-text rendition of a source PDF, with
//!   page-boundary markers
//! - **AnalysisReport**: the structured result - summary, named sections,
//!   and rule checks
//! - **Rule catalog**: the six fixed compliance rules every report must
//!   answer, and the seven named sections it must fill
//!
//! ## Architecture
//!
//! Infrastructure (PDF parsing, HTTP providers) lives in other crates.
//! This crate holds pure data types and the serialization contract only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod report;
pub mod rules;
pub mod transcript;

// Re-exports for convenience
pub use report::{AnalysisReport, Confidence, ReportError, RuleCheck, RuleStatus, Sections};
pub use rules::{REQUIRED_RULES, SECTION_NAMES};
pub use transcript::Transcript;

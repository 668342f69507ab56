//! The analysis report model - the terminal artifact of the pipeline
//!
//! The report is persisted exactly as the remote service shapes it, so every
//! type here doubles as the serde contract for `final_report.json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when report fields fail their value constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Confidence score outside 0..=100
    #[error("confidence {0} is outside the 0-100 range")]
    ConfidenceOutOfRange(u64),

    /// Unknown rule-check status string
    #[error("unknown rule status '{0}' (expected 'pass' or 'fail')")]
    UnknownStatus(String),
}

/// Structured result of a document analysis.
///
/// Three top-level fields: an ordered list of summary statements, the seven
/// named sections, and one check result per rule in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Ordered summary statements
    pub summary: Vec<String>,

    /// Named free-text sections
    pub sections: Sections,

    /// One result per catalog rule, in catalog order
    pub rule_checks: Vec<RuleCheck>,
}

/// The seven named free-text sections of a report.
///
/// Field order matches [`crate::rules::SECTION_NAMES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    /// Key terms defined by the act
    pub definitions: String,
    /// Obligations the act imposes
    pub obligations: String,
    /// Responsibilities of the administering authority
    pub responsibilities: String,
    /// Who qualifies and under what conditions
    pub eligibility: String,
    /// Payment calculation and entitlement structure
    pub payments: String,
    /// Enforcement and penalty provisions
    pub penalties: String,
    /// Record-keeping and reporting requirements
    pub record_keeping: String,
}

/// One compliance assertion about the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCheck {
    /// The rule being checked, verbatim from the catalog
    pub rule: String,

    /// Whether the document satisfies the rule
    pub status: RuleStatus,

    /// Section or clause where the evidence was found
    pub evidence: String,

    /// How certain the model is, 0-100
    pub confidence: Confidence,
}

/// Pass/fail outcome of a rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// The document satisfies the rule
    Pass,
    /// The document does not satisfy the rule
    Fail,
}

impl RuleStatus {
    /// Parse a status from its wire form.
    pub fn parse(s: &str) -> Result<Self, ReportError> {
        match s {
            "pass" => Ok(RuleStatus::Pass),
            "fail" => Ok(RuleStatus::Fail),
            other => Err(ReportError::UnknownStatus(other.to_string())),
        }
    }

    /// The wire form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Pass => "pass",
            RuleStatus::Fail => "fail",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A confidence score in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Confidence(u8);

impl Confidence {
    /// Create a confidence score, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, ReportError> {
        if value > 100 {
            return Err(ReportError::ConfidenceOutOfRange(u64::from(value)));
        }
        Ok(Self(value))
    }

    /// The raw score.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for Confidence {
    type Error = ReportError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ReportError::ConfidenceOutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

impl From<Confidence> for u64 {
    fn from(c: Confidence) -> Self {
        u64::from(c.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

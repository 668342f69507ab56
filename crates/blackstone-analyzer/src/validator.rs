//! Report shape validation
//!
//! The remote service is only *asked* for the report shape; nothing
//! guarantees it complied. Before a report is persisted, this validator
//! checks the parsed JSON against the documented shape and collects every
//! violation rather than stopping at the first.

use blackstone_domain::{RuleStatus, REQUIRED_RULES, SECTION_NAMES};
use serde_json::Value;
use thiserror::Error;

/// A single way in which a response failed the report shape
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeViolation {
    /// A required top-level field is absent
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// `summary` is not a non-empty array of strings
    #[error("'summary' must be a non-empty array of strings")]
    InvalidSummary,

    /// `sections` is not an object
    #[error("'sections' must be an object")]
    InvalidSections,

    /// A named section is absent
    #[error("'sections' is missing entry '{0}'")]
    MissingSection(&'static str),

    /// A named section is not a string
    #[error("section '{0}' must be a string")]
    InvalidSection(&'static str),

    /// `rule_checks` is not an array of the catalog size
    #[error("'rule_checks' must contain exactly {expected} entries, found {found}")]
    WrongRuleCount {
        /// Catalog size
        expected: usize,
        /// Entries actually present
        found: usize,
    },

    /// A rule check entry is missing a field or holds the wrong type
    #[error("rule check {index}: missing or invalid '{field}'")]
    InvalidRuleCheck {
        /// Zero-based index into `rule_checks`
        index: usize,
        /// Offending field name
        field: &'static str,
    },

    /// A rule check carries a status outside pass/fail
    #[error("rule check {index}: unknown status '{status}'")]
    UnknownStatus {
        /// Zero-based index into `rule_checks`
        index: usize,
        /// The status string received
        status: String,
    },

    /// A rule check carries a confidence outside 0-100
    #[error("rule check {index}: confidence {value} outside the 0-100 range")]
    ConfidenceOutOfRange {
        /// Zero-based index into `rule_checks`
        index: usize,
        /// The confidence received
        value: f64,
    },
}

/// Validate a parsed response against the report shape.
///
/// Returns every violation found; an empty violation list means the report
/// can be persisted as-is.
pub fn validate_report(report: &Value) -> Result<(), Vec<ShapeViolation>> {
    let mut violations = Vec::new();

    validate_summary(report, &mut violations);
    validate_sections(report, &mut violations);
    validate_rule_checks(report, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn validate_summary(report: &Value, violations: &mut Vec<ShapeViolation>) {
    let Some(summary) = report.get("summary") else {
        violations.push(ShapeViolation::MissingField("summary"));
        return;
    };
    let valid = summary
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_string));
    if !valid {
        violations.push(ShapeViolation::InvalidSummary);
    }
}

fn validate_sections(report: &Value, violations: &mut Vec<ShapeViolation>) {
    let Some(sections) = report.get("sections") else {
        violations.push(ShapeViolation::MissingField("sections"));
        return;
    };
    let Some(map) = sections.as_object() else {
        violations.push(ShapeViolation::InvalidSections);
        return;
    };
    for name in SECTION_NAMES {
        match map.get(name) {
            None => violations.push(ShapeViolation::MissingSection(name)),
            Some(value) if !value.is_string() => {
                violations.push(ShapeViolation::InvalidSection(name))
            }
            Some(_) => {}
        }
    }
}

fn validate_rule_checks(report: &Value, violations: &mut Vec<ShapeViolation>) {
    let Some(checks) = report.get("rule_checks") else {
        violations.push(ShapeViolation::MissingField("rule_checks"));
        return;
    };
    let Some(entries) = checks.as_array() else {
        violations.push(ShapeViolation::WrongRuleCount {
            expected: REQUIRED_RULES.len(),
            found: 0,
        });
        return;
    };
    if entries.len() != REQUIRED_RULES.len() {
        violations.push(ShapeViolation::WrongRuleCount {
            expected: REQUIRED_RULES.len(),
            found: entries.len(),
        });
    }

    for (index, entry) in entries.iter().enumerate() {
        if !entry.get("rule").is_some_and(Value::is_string) {
            violations.push(ShapeViolation::InvalidRuleCheck {
                index,
                field: "rule",
            });
        }
        if !entry.get("evidence").is_some_and(Value::is_string) {
            violations.push(ShapeViolation::InvalidRuleCheck {
                index,
                field: "evidence",
            });
        }
        match entry.get("status").and_then(Value::as_str) {
            Some(status) => {
                if RuleStatus::parse(status).is_err() {
                    violations.push(ShapeViolation::UnknownStatus {
                        index,
                        status: status.to_string(),
                    });
                }
            }
            None => violations.push(ShapeViolation::InvalidRuleCheck {
                index,
                field: "status",
            }),
        }
        match entry.get("confidence").and_then(Value::as_f64) {
            Some(value) => {
                if !(0.0..=100.0).contains(&value) {
                    violations.push(ShapeViolation::ConfidenceOutOfRange { index, value });
                }
            }
            None => violations.push(ShapeViolation::InvalidRuleCheck {
                index,
                field: "confidence",
            }),
        }
    }
}

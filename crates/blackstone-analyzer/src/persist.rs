//! Report persistence

use crate::error::AnalyzerError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialize a report as 4-space-indented JSON text.
pub fn to_pretty_json(report: &Value) -> Result<String, AnalyzerError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    report.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8(out).expect("serialized JSON is UTF-8"))
}

/// Write the report to `path` as pretty-printed UTF-8 JSON.
pub fn write_report(report: &Value, path: impl AsRef<Path>) -> Result<(), AnalyzerError> {
    fs::write(path, to_pretty_json(report)?)?;
    Ok(())
}

//! Parse the provider response into a report JSON object

use crate::error::AnalyzerError;
use serde_json::Value;

/// Parse a chat-completion response body as a JSON report object.
///
/// The service is directed to return a bare JSON object, but models
/// sometimes wrap the body in a markdown code block anyway; that wrapper is
/// tolerated and stripped before parsing. Anything that is not a JSON
/// object after unwrapping is an error.
pub fn parse_response(response: &str) -> Result<Value, AnalyzerError> {
    let json_str = extract_json(response)?;

    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| AnalyzerError::InvalidJson(format!("JSON parse error: {}", e)))?;

    if !value.is_object() {
        return Err(AnalyzerError::InvalidJson(
            "Expected a JSON object".to_string(),
        ));
    }

    Ok(value)
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, AnalyzerError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(AnalyzerError::InvalidJson("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_object() {
        let response = r#"{"summary": ["one"], "sections": {}, "rule_checks": []}"#;
        let value = parse_response(response).unwrap();
        assert_eq!(value["summary"][0], "one");
    }

    #[test]
    fn test_parse_object_with_markdown_wrapper() {
        let response = "```json\n{\"summary\": [\"wrapped\"]}\n```";
        let value = parse_response(response).unwrap();
        assert_eq!(value["summary"][0], "wrapped");
    }

    #[test]
    fn test_parse_object_with_bare_fence() {
        let response = "```\n{\"summary\": []}\n```";
        let value = parse_response(response).unwrap();
        assert!(value["summary"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let response = "\n\n  {\"summary\": []}  \n";
        assert!(parse_response(response).is_ok());
    }

    #[test]
    fn test_non_json_is_rejected() {
        let result = parse_response("I'm sorry, I can't produce that report.");
        assert!(matches!(result, Err(AnalyzerError::InvalidJson(_))));
    }

    #[test]
    fn test_json_array_is_rejected() {
        let result = parse_response(r#"["not", "an", "object"]"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidJson(_))));
    }

    #[test]
    fn test_empty_code_block_is_rejected() {
        let result = parse_response("```");
        assert!(matches!(result, Err(AnalyzerError::InvalidJson(_))));
    }
}

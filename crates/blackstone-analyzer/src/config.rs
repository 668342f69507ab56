//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};

/// Default model identifier; a fast model with reliable structured JSON.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";

/// Default output-token budget for the single completion call.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Configuration for the Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Model identifier sent to the provider
    pub model: String,

    /// Maximum output-token budget
    pub max_tokens: u32,

    /// Reject responses that do not match the report shape.
    /// When false, any syntactically valid JSON object is persisted
    /// unchanged.
    pub strict: bool,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Permissive preset: skip shape validation, persist whatever parses.
    pub fn permissive() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            strict: true,
        }
    }
}

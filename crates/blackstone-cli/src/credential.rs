//! API credential resolution.
//!
//! The credential is a fatal precondition of the analysis stage: it is read
//! before any provider is constructed, so a missing key means zero network
//! activity.

use crate::error::{CliError, Result};

/// Environment variable holding the OpenRouter API key.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Read the API key from the environment, treating empty values as absent.
pub fn require_api_key() -> Result<String> {
    require_api_key_from(API_KEY_VAR)
}

fn require_api_key_from(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CliError::MissingApiKey),
    }
}

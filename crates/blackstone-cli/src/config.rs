//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use blackstone_analyzer::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// The API credential deliberately does not live here; it comes from the
/// environment only, so config files stay safe to share.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analysis settings
    #[serde(default)]
    pub analyzer: AnalyzerSettings,

    /// Pipeline file locations
    #[serde(default)]
    pub paths: PathSettings,
}

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output-token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// Pipeline file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Source PDF
    #[serde(default = "default_pdf")]
    pub pdf: PathBuf,

    /// Intermediate transcript
    #[serde(default = "default_transcript")]
    pub transcript: PathBuf,

    /// Final report
    #[serde(default = "default_report")]
    pub report: PathBuf,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".blackstone").join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            pdf: default_pdf(),
            transcript: default_transcript(),
            report: default_report(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_pdf() -> PathBuf {
    PathBuf::from("Universal_Credit_Act_2025.pdf")
}

fn default_transcript() -> PathBuf {
    PathBuf::from("extracted_act_text.txt")
}

fn default_report() -> PathBuf {
    PathBuf::from("final_report.json")
}

//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::credential;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_analyzer::{write_report, Analyzer, AnalyzerConfig};
use blackstone_llm::{ChatProvider, OpenRouterProvider};
use std::path::Path;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    // Credential precondition comes first: without it no provider is even
    // constructed, so no network call can happen.
    let api_key = credential::require_api_key()?;

    let transcript_path = args
        .transcript
        .unwrap_or_else(|| config.paths.transcript.clone());
    let report_path = args.out.unwrap_or_else(|| config.paths.report.clone());

    let analyzer_config = AnalyzerConfig {
        model: args.model.unwrap_or_else(|| config.analyzer.model.clone()),
        max_tokens: config.analyzer.max_tokens,
        strict: !args.permissive,
    };

    let provider = OpenRouterProvider::new(api_key);
    run_analysis(
        provider,
        analyzer_config,
        &transcript_path,
        &report_path,
        formatter,
    )
    .await
}

/// Run the analysis stage against any provider.
///
/// Split out from `execute_analyze` so tests can drive it with a mock.
pub(crate) async fn run_analysis<P: ChatProvider>(
    provider: P,
    config: AnalyzerConfig,
    transcript_path: &Path,
    report_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Sending analysis request to {} via OpenRouter",
            config.model
        ))
    );

    let analyzer = Analyzer::new(provider, config)?;
    let report = analyzer.analyze_file(transcript_path).await?;

    write_report(&report, report_path)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Analysis complete. Report saved to {}",
            report_path.display()
        ))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use blackstone_domain::{Transcript, REQUIRED_RULES, SECTION_NAMES};
    use blackstone_llm::MockProvider;
    use serde_json::{json, Value};
    use std::path::PathBuf;

    fn valid_report_body() -> Value {
        let checks: Vec<Value> = REQUIRED_RULES
            .iter()
            .map(|rule| {
                json!({
                    "rule": rule,
                    "status": "fail",
                    "evidence": "Not present in the act",
                    "confidence": 72
                })
            })
            .collect();

        let mut sections = serde_json::Map::new();
        for name in SECTION_NAMES {
            sections.insert(name.to_string(), json!("..."));
        }

        json!({
            "summary": ["One statement"],
            "sections": sections,
            "rule_checks": checks
        })
    }

    fn saved_transcript(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("extracted_act_text.txt");
        Transcript::new("--- PAGE 1 ---\nSection 1. Interpretation.")
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_analysis_writes_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let transcript_path = saved_transcript(&dir);
        let report_path = dir.path().join("final_report.json");

        let body = valid_report_body();
        let provider = MockProvider::new(serde_json::to_string(&body).unwrap());

        run_analysis(
            provider,
            AnalyzerConfig::default(),
            &transcript_path,
            &report_path,
            &Formatter::new(false),
        )
        .await
        .unwrap();

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(on_disk, body);
    }

    #[tokio::test]
    async fn test_non_json_response_leaves_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let transcript_path = saved_transcript(&dir);
        let report_path = dir.path().join("final_report.json");

        let provider = MockProvider::new("no JSON here");

        let result = run_analysis(
            provider,
            AnalyzerConfig::default(),
            &transcript_path,
            &report_path,
            &Formatter::new(false),
        )
        .await;

        assert!(matches!(result, Err(CliError::Analyzer(_))));
        assert!(!report_path.exists());
    }

    #[tokio::test]
    async fn test_existing_report_is_untouched_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let transcript_path = saved_transcript(&dir);
        let report_path = dir.path().join("final_report.json");
        std::fs::write(&report_path, r#"{"summary": ["previous run"]}"#).unwrap();

        let provider = MockProvider::new("still not JSON");

        let result = run_analysis(
            provider,
            AnalyzerConfig::default(),
            &transcript_path,
            &report_path,
            &Formatter::new(false),
        )
        .await;
        assert!(result.is_err());

        let preserved = std::fs::read_to_string(&report_path).unwrap();
        assert_eq!(preserved, r#"{"summary": ["previous run"]}"#);
    }

    #[tokio::test]
    async fn test_missing_transcript_makes_no_provider_call() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("final_report.json");

        let provider = MockProvider::new("{}");

        let result = run_analysis(
            provider.clone(),
            AnalyzerConfig::default(),
            &dir.path().join("missing.txt"),
            &report_path,
            &Formatter::new(false),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(provider.call_count(), 0);
        assert!(!report_path.exists());
    }

    #[tokio::test]
    async fn test_missing_credential_aborts_before_any_work() {
        std::env::remove_var(credential::API_KEY_VAR);

        let args = AnalyzeArgs {
            transcript: Some(PathBuf::from("anything.txt")),
            out: None,
            model: None,
            permissive: false,
        };

        let result = execute_analyze(args, &Config::default(), &Formatter::new(false)).await;
        assert!(matches!(result, Err(CliError::MissingApiKey)));
    }
}

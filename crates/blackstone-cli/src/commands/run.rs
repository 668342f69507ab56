//! Run command implementation: extract then analyze in one invocation.
//!
//! The stages stay independently runnable; this is sequencing only, with
//! the transcript file as the sole hand-off between them.

use crate::cli::{AnalyzeArgs, ExtractArgs, RunArgs};
use crate::commands::{execute_analyze, execute_extract};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute both stages in sequence.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let extract_args = ExtractArgs {
        pdf: args.pdf,
        out: args.transcript.clone(),
    };
    execute_extract(extract_args, config, formatter)?;

    let analyze_args = AnalyzeArgs {
        transcript: args.transcript,
        out: args.out,
        model: args.model,
        permissive: args.permissive,
    };
    execute_analyze(analyze_args, config, formatter).await
}

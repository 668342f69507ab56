//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_pdf::extract_transcript;

/// Execute the extract command.
///
/// On failure nothing is written; the existing transcript (if any) is left
/// untouched.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let pdf_path = args.pdf.unwrap_or_else(|| config.paths.pdf.clone());
    let out_path = args.out.unwrap_or_else(|| config.paths.transcript.clone());

    println!(
        "{}",
        formatter.info(&format!("Extracting text from {}", pdf_path.display()))
    );

    let transcript = extract_transcript(&pdf_path)?;

    if !transcript.has_content() {
        println!(
            "{}",
            formatter.info("No text content found; the document may be scanned images")
        );
    }

    transcript.save(&out_path)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Text extraction complete ({} pages). Saved to {}",
            transcript.page_count(),
            out_path.display()
        ))
    );
    Ok(())
}

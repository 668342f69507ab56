//! Prompt assembly for the analysis call
//!
//! The required JSON structure in the system block is generated from the
//! rule catalog and section names in `blackstone-domain`, so the prompt and
//! the local validator can never disagree about the shape.

use blackstone_domain::{Transcript, REQUIRED_RULES, SECTION_NAMES};

const ANALYST_INSTRUCTIONS: &str = "You are a Legislative AI Analyst. Your task is to analyze the provided legal \
text and return a single, comprehensive JSON object that STRICTLY adheres to \
the required structure below. DO NOT include any text, notes, or explanations \
outside of the final JSON object.";

const USER_HEADER: &str = "Analyze the following document and generate the JSON report according to the \
required structure:";

/// Builds the fixed-role text blocks for one analysis request
pub struct PromptBuilder<'a> {
    transcript: &'a Transcript,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder over a transcript
    pub fn new(transcript: &'a Transcript) -> Self {
        Self { transcript }
    }

    /// Build the system-role block: analyst instructions plus the rigid
    /// JSON-shape specification.
    pub fn build_system(&self) -> String {
        let mut prompt = String::from(ANALYST_INSTRUCTIONS);
        prompt.push_str("\n\n--- REQUIRED JSON STRUCTURE ---\n");
        prompt.push_str(&required_structure());
        prompt
    }

    /// Build the user-role block embedding the transcript verbatim.
    pub fn build_user(&self) -> String {
        let mut prompt = String::from(USER_HEADER);
        prompt.push_str("\n\n--- DOCUMENT TEXT ---\n");
        prompt.push_str(self.transcript.as_str());
        prompt
    }
}

/// Render the required report shape as a template the model can mirror.
fn required_structure() -> String {
    let mut s = String::from(
        "{\n  \"summary\": [\n    \"Purpose of the Act...\",\n    \"Key definitions...\",\n    \
\"Eligibility criteria...\",\n    \"Obligations...\",\n    \"Enforcement elements...\"\n  ],\n  \"sections\": {\n",
    );

    for (idx, name) in SECTION_NAMES.iter().enumerate() {
        let comma = if idx + 1 < SECTION_NAMES.len() { "," } else { "" };
        s.push_str(&format!("    \"{}\": \"...\"{}\n", name, comma));
    }
    s.push_str("  },\n  \"rule_checks\": [\n");

    for (idx, rule) in REQUIRED_RULES.iter().enumerate() {
        let comma = if idx + 1 < REQUIRED_RULES.len() { "," } else { "" };
        s.push_str(&format!(
            "    {{\n      \"rule\": \"{}\",\n      \"status\": \"pass\" or \"fail\",\n      \
\"evidence\": \"Section/Clause where evidence is found\",\n      \"confidence\": 0-100\n    }}{}\n",
            rule, comma
        ));
    }
    s.push_str("  ]\n}");
    s
}

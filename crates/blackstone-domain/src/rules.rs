//! The fixed analysis contract: rule catalog and section names
//!
//! Both the prompt sent to the model and the local report validation are
//! derived from these constants, so the two can never drift apart.

/// The six compliance rules every report must answer, in order.
pub const REQUIRED_RULES: [&str; 6] = [
    "Act must define key terms",
    "Act must specify eligibility criteria",
    "Act must specify responsibilities of the administering authority",
    "Act must include enforcement or penalties",
    "Act must include payment calculation or entitlement structure",
    "Act must include record-keeping or reporting requirements",
];

/// The seven named sections every report must fill, in order.
pub const SECTION_NAMES: [&str; 7] = [
    "definitions",
    "obligations",
    "responsibilities",
    "eligibility",
    "payments",
    "penalties",
    "record_keeping",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_catalog_is_fixed() {
        assert_eq!(REQUIRED_RULES.len(), 6);
        assert!(REQUIRED_RULES.iter().all(|r| r.starts_with("Act must")));
    }

    #[test]
    fn test_section_names_are_unique() {
        let mut names: Vec<&str> = SECTION_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SECTION_NAMES.len());
    }
}

//! Quantified-claim provenance checking for the Present Levels section.

use crate::patterns::{context_window, INVENTED_METRIC_PATTERNS};
use shared_types::{EvidenceKind, Occurrence, Rule, Severity, Violation};

/// Flag quantified metrics in Present Levels that the intake narrative does
/// not state verbatim.
///
/// Provenance is a literal case-insensitive substring check against the
/// narrative. Paraphrased inventions are missed, and numeric reformatting
/// ("five errors" in the narrative vs "5 errors" in the draft) is not
/// reconciled. The literal contract is intentional and pinned by tests.
pub fn check_invented_data(present_levels: &str, narrative: &str) -> Option<Violation> {
    let narrative_lower = narrative.to_lowercase();
    let mut occurrences = Vec::new();

    for (pattern, kind) in INVENTED_METRIC_PATTERNS.iter() {
        for m in pattern.find_iter(present_levels) {
            let matched_lower = m.as_str().to_lowercase();

            // Percentile figures are standardized scores, not invented
            // observations. The exemption covers the comprehension pattern
            // only.
            if *kind == EvidenceKind::ComprehensionPercentage
                && matched_lower.contains("percentile")
            {
                continue;
            }

            if narrative_lower.contains(&matched_lower) {
                continue;
            }

            occurrences.push(Occurrence {
                text: m.as_str().to_string(),
                kind: *kind,
                context: Some(context_window(present_levels, m.start(), m.end(), 80)),
                reason: None,
            });
        }
    }

    if occurrences.is_empty() {
        return None;
    }

    Some(Violation {
        rule: Rule::DataInvention,
        severity: Severity::Critical,
        message: format!(
            "Found {} quantified claim(s) in Present Levels with no verbatim support in the intake narrative",
            occurrences.len()
        ),
        occurrences,
    })
}

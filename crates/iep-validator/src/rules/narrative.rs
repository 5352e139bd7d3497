//! Functional-performance narrative authorization.
//!
//! The generator must not invent behavioral narrative about a student
//! unless the intake narrative already signals that dimension is relevant.
//! Both sides of the check are fixed enumerations: trigger phrases
//! authorize, indicator phrases detect. Phrasing outside either list is an
//! accepted miss.

use crate::patterns::{context_window, FUNCTIONAL_INDICATOR_PATTERNS, TRIGGER_CATEGORIES};
use shared_types::{EvidenceKind, Occurrence, Rule, Severity, Violation};

/// First trigger phrase found in the intake narrative, as
/// `(category, phrase)`.
pub fn find_trigger_phrase(narrative: &str) -> Option<(&'static str, &'static str)> {
    let narrative_lower = narrative.to_lowercase();

    for &(category, phrases) in TRIGGER_CATEGORIES {
        for &phrase in phrases {
            if narrative_lower.contains(phrase) {
                return Some((category, phrase));
            }
        }
    }

    None
}

/// Flag functional-performance content in Present Levels when the intake
/// narrative contains no authorizing trigger phrase.
pub fn check_functional_narrative(present_levels: &str, narrative: &str) -> Option<Violation> {
    if find_trigger_phrase(narrative).is_some() {
        // The narrative authorizes functional content; whatever the draft
        // says about it is in bounds.
        return None;
    }

    let mut occurrences = Vec::new();
    for pattern in FUNCTIONAL_INDICATOR_PATTERNS.iter() {
        if let Some(m) = pattern.find(present_levels) {
            occurrences.push(Occurrence {
                text: m.as_str().to_string(),
                kind: EvidenceKind::FunctionalIndicator,
                context: Some(context_window(present_levels, m.start(), m.end(), 80)),
                reason: None,
            });
        }
    }

    if occurrences.is_empty() {
        return None;
    }

    Some(Violation {
        rule: Rule::UnauthorizedNarrative,
        severity: Severity::Critical,
        message: "Present Levels contains functional-performance narrative but the intake \
                  narrative has no trigger phrase for attention, task completion, \
                  organization, behavior, or prompting"
            .to_string(),
        occurrences,
    })
}

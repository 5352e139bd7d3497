//! Authorization of accommodations-table categories against Present Levels.

use crate::patterns::CATEGORY_RULES;
use shared_types::{EvidenceKind, Occurrence, Rule, Severity, Violation};

/// Flag accommodation categories whose subject is never discussed in the
/// Present Levels section.
///
/// A category row is identified by its glyph-and-label marker in the
/// accommodations table; it is authorized only when one of the category's
/// subject keywords occurs anywhere in Present Levels.
pub fn check_unauthorized_categories(
    accommodations: &str,
    present_levels: &str,
) -> Option<Violation> {
    let present_levels_lower = present_levels.to_lowercase();
    let mut occurrences = Vec::new();

    for category in CATEGORY_RULES.iter() {
        if !category.marker.is_match(accommodations) {
            continue;
        }

        let subject_mentioned = category
            .subject_keywords
            .iter()
            .any(|keyword| present_levels_lower.contains(keyword));

        if !subject_mentioned {
            occurrences.push(Occurrence {
                text: category.label.to_string(),
                kind: EvidenceKind::UnauthorizedCategory,
                context: None,
                reason: Some(format!(
                    "{} category in the accommodations table but not mentioned in Present Levels",
                    category.label
                )),
            });
        }
    }

    if occurrences.is_empty() {
        return None;
    }

    Some(Violation {
        rule: Rule::UnauthorizedCategory,
        severity: Severity::High,
        message: format!(
            "Found {} accommodations categor(ies) with no backing subject in Present Levels",
            occurrences.len()
        ),
        occurrences,
    })
}

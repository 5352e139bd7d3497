//! Literal reproduction of the Areas of Concern intake field.

use crate::patterns::{context_window, EXPANSION_PATTERN};
use crate::sections::{section_body, strip_markup};
use shared_types::{EvidenceKind, Occurrence, Rule, Severity, Violation};

/// Flag parenthetical example expansions of the literal Areas of Concern
/// value, e.g. "Academic (reading)" rewritten as
/// "Academic (e.g., reading, writing, math)".
///
/// The pattern runs against the raw section text, since expansions can sit
/// inside or outside markup tags; the stripped text is only used for the
/// human-readable comparison in the message.
pub fn check_literal_areas(areas_section: &str, expected: &str) -> Option<Violation> {
    let mut occurrences = Vec::new();

    for m in EXPANSION_PATTERN.find_iter(areas_section) {
        occurrences.push(Occurrence {
            text: m.as_str().to_string(),
            kind: EvidenceKind::ParentheticalExpansion,
            context: Some(context_window(areas_section, m.start(), m.end(), 80)),
            reason: None,
        });
    }

    if occurrences.is_empty() {
        return None;
    }

    let actual = strip_markup(section_body(areas_section));
    Some(Violation {
        rule: Rule::LiteralFieldExpansion,
        severity: Severity::Critical,
        message: format!(
            "Areas of Concern must reproduce the intake value verbatim. Expected \"{}\", got \"{}\"",
            expected, actual
        ),
        occurrences,
    })
}

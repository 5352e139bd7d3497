//! Report rendering over a `ValidationResult`.
//!
//! Pure templating; formatting never alters the underlying result.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use shared_types::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Markup,
}

/// Render a validation result for display.
pub fn format_report(result: &ValidationResult, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => format_text(result),
        ReportFormat::Markup => format_markup(result),
    }
}

fn format_text(result: &ValidationResult) -> String {
    let mut out = String::new();
    let divider = "=".repeat(78);

    let _ = writeln!(out, "{}", divider);
    let _ = writeln!(out, "IEP DRAFT CONTENT-POLICY REPORT");
    let _ = writeln!(out, "{}", divider);
    if let Some(id) = &result.document_id {
        let _ = writeln!(out, "Document: {}", id);
    }
    let _ = writeln!(out, "Checked at: {}", result.checked_at);
    let _ = writeln!(
        out,
        "Status: {}",
        if result.compliant {
            "✅ COMPLIANT"
        } else {
            "❌ NOT COMPLIANT"
        }
    );
    let _ = writeln!(
        out,
        "Violations: {} (critical: {}, high: {})",
        result.summary.total, result.summary.critical, result.summary.high
    );
    let _ = writeln!(out, "{}", divider);

    if result.violations.is_empty() {
        let _ = writeln!(out, "\nNo violations found.");
        return out;
    }

    for (index, violation) in result.violations.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n[{}] {} ({})",
            index + 1,
            violation.rule,
            violation.severity
        );
        let _ = writeln!(out, "    {}", violation.message);

        for (n, occurrence) in violation.occurrences.iter().enumerate() {
            let _ = writeln!(
                out,
                "    {}. \"{}\" ({})",
                n + 1,
                occurrence.text,
                occurrence.kind
            );
            if let Some(context) = &occurrence.context {
                let _ = writeln!(out, "       Context: {}", context);
            }
            if let Some(reason) = &occurrence.reason {
                let _ = writeln!(out, "       Reason: {}", reason);
            }
        }
    }

    out
}

fn format_markup(result: &ValidationResult) -> String {
    let mut out = String::new();

    let status = if result.compliant {
        "✅ COMPLIANT"
    } else {
        "❌ NOT COMPLIANT"
    };

    let _ = writeln!(out, "<div class=\"validation-report\">");
    let _ = writeln!(out, "<h3>IEP Draft Content-Policy Report</h3>");
    let _ = writeln!(out, "<p><strong>Status:</strong> {}</p>", status);
    let _ = writeln!(
        out,
        "<p><strong>Violations:</strong> {} (critical: {}, high: {})</p>",
        result.summary.total, result.summary.critical, result.summary.high
    );

    if !result.violations.is_empty() {
        let _ = writeln!(out, "<ul>");
        for violation in &result.violations {
            let _ = writeln!(
                out,
                "<li><strong>[{}] {}</strong><br>{}",
                violation.severity, violation.rule, violation.message
            );
            if !violation.occurrences.is_empty() {
                let _ = writeln!(out, "<ul>");
                for occurrence in &violation.occurrences {
                    let _ = writeln!(
                        out,
                        "<li>\"{}\" <em>({})</em></li>",
                        occurrence.text, occurrence.kind
                    );
                }
                let _ = writeln!(out, "</ul>");
            }
            let _ = writeln!(out, "</li>");
        }
        let _ = writeln!(out, "</ul>");
    }

    let _ = writeln!(out, "</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        EvidenceKind, Occurrence, Rule, Severity, ValidationSummary, Violation,
    };

    fn sample_result(violations: Vec<Violation>) -> ValidationResult {
        let summary = ValidationSummary::tally(&violations);
        ValidationResult {
            document_id: Some("draft-17".to_string()),
            compliant: violations.is_empty(),
            violations,
            summary,
            checked_at: 1_722_945_600,
        }
    }

    fn sample_violation() -> Violation {
        Violation {
            rule: Rule::DataInvention,
            severity: Severity::Critical,
            message: "Found 1 quantified claim(s)".to_string(),
            occurrences: vec![Occurrence {
                text: "50% of the time".to_string(),
                kind: EvidenceKind::IndependencePercentage,
                context: Some("...independently 50% of the time...".to_string()),
                reason: None,
            }],
        }
    }

    #[test]
    fn text_report_lists_violations_with_evidence() {
        let report = format_report(&sample_result(vec![sample_violation()]), ReportFormat::Text);
        assert!(report.contains("❌ NOT COMPLIANT"));
        assert!(report.contains("[1] DATA_INVENTION (CRITICAL)"));
        assert!(report.contains("\"50% of the time\" (independence_percentage)"));
        assert!(report.contains("Violations: 1 (critical: 1, high: 0)"));
    }

    #[test]
    fn text_report_for_clean_result() {
        let report = format_report(&sample_result(Vec::new()), ReportFormat::Text);
        assert!(report.contains("✅ COMPLIANT"));
        assert!(report.contains("No violations found."));
    }

    #[test]
    fn markup_report_wraps_violations_in_lists() {
        let report = format_report(
            &sample_result(vec![sample_violation()]),
            ReportFormat::Markup,
        );
        assert!(report.starts_with("<div class=\"validation-report\">"));
        assert!(report.contains("<strong>[CRITICAL] DATA_INVENTION</strong>"));
        assert!(report.contains("<em>(independence_percentage)</em>"));
    }

    #[test]
    fn formatting_does_not_alter_the_result() {
        let result = sample_result(vec![sample_violation()]);
        let before = serde_json::to_string(&result).unwrap();
        let _ = format_report(&result, ReportFormat::Text);
        let _ = format_report(&result, ReportFormat::Markup);
        assert_eq!(serde_json::to_string(&result).unwrap(), before);
    }

    #[test]
    fn report_format_parses_from_wire_names() {
        let format: ReportFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, ReportFormat::Text);
        let format: ReportFormat = serde_json::from_str("\"markup\"").unwrap();
        assert_eq!(format, ReportFormat::Markup);
    }
}

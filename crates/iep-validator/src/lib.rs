//! Content-policy validation for generated IEP drafts.
//!
//! A draft arrives from the generation pipeline as section-delimited HTML.
//! The validator slices out the sections of interest once, runs four
//! independent rule checkers against them and the intake facts, and
//! aggregates the findings into a [`ValidationResult`].

pub mod patterns;
pub mod report;
pub mod rules;
pub mod sections;

use sections::{
    extract_section, ACCOMMODATIONS_LABEL, AREAS_OF_CONCERN_LABEL, PRESENT_LEVELS_LABEL,
};
use shared_types::{DraftDocument, IepInput, ValidationResult, ValidationSummary};

pub use report::{format_report, ReportFormat};

/// IepValidator entry point
pub struct IepValidator;

impl IepValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a generated draft against the intake facts.
    ///
    /// Total over any pair of strings: absent sections mean there is
    /// nothing to check, so a malformed or empty document yields a
    /// compliant result rather than an error.
    pub fn validate(&self, input: &IepInput, document: &str) -> ValidationResult {
        self.build_result(input, document, None)
    }

    /// Validate a draft record, carrying its id into the result.
    pub fn validate_draft(&self, input: &IepInput, draft: &DraftDocument) -> ValidationResult {
        self.build_result(input, &draft.html, Some(draft.id.clone()))
    }

    fn build_result(
        &self,
        input: &IepInput,
        document: &str,
        document_id: Option<String>,
    ) -> ValidationResult {
        // Extract once; checkers share the slices.
        let present_levels = extract_section(document, PRESENT_LEVELS_LABEL);
        let areas_of_concern = extract_section(document, AREAS_OF_CONCERN_LABEL);
        let accommodations = extract_section(document, ACCOMMODATIONS_LABEL);

        let mut violations = Vec::new();
        violations.extend(rules::check_invented_data(
            present_levels,
            &input.performance_narrative,
        ));
        violations.extend(rules::check_functional_narrative(
            present_levels,
            &input.performance_narrative,
        ));
        violations.extend(rules::check_literal_areas(
            areas_of_concern,
            &input.areas_of_concern,
        ));
        violations.extend(rules::check_unauthorized_categories(
            accommodations,
            present_levels,
        ));

        let summary = ValidationSummary::tally(&violations);
        ValidationResult {
            document_id,
            compliant: violations.is_empty(),
            violations,
            summary,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for IepValidator {
    fn default() -> Self {
        Self::new()
    }
}

//! Property-based tests for the validation engine.
//!
//! `validate` is a total function: any pair of narrative/document strings
//! must produce a result whose summary invariants hold, without panicking.

use proptest::prelude::*;

use iep_validator::IepValidator;
use shared_types::{IepInput, Severity};

fn intake(narrative: String) -> IepInput {
    IepInput {
        performance_narrative: narrative,
        grade_level: "4th grade".to_string(),
        areas_of_concern: "Academic (reading)".to_string(),
        priority_goal_areas: vec!["Reading fluency".to_string()],
        accommodations: vec!["Extended time".to_string()],
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validate_is_total(narrative in ".*", document in ".*") {
        let result = IepValidator::new().validate(&intake(narrative), &document);
        prop_assert_eq!(result.compliant, result.violations.is_empty());
    }

    #[test]
    fn summary_invariants_always_hold(narrative in ".{0,200}", document in ".{0,500}") {
        let result = IepValidator::new().validate(&intake(narrative), &document);

        prop_assert_eq!(result.summary.total, result.violations.len());
        prop_assert_eq!(
            result.summary.critical,
            result
                .violations
                .iter()
                .filter(|v| v.severity == Severity::Critical)
                .count()
        );
        prop_assert_eq!(
            result.summary.high,
            result
                .violations
                .iter()
                .filter(|v| v.severity == Severity::High)
                .count()
        );
    }

    #[test]
    fn validation_is_deterministic(narrative in ".{0,200}", document in ".{0,500}") {
        let validator = IepValidator::new();
        let input = intake(narrative);

        let first = validator.validate(&input, &document);
        let second = validator.validate(&input, &document);

        prop_assert_eq!(first.compliant, second.compliant);
        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(first.violations.len(), second.violations.len());
    }

    #[test]
    fn sectioned_documents_never_break_invariants(body in "[a-zA-Z0-9 %.,()-]{0,200}") {
        let document = format!(
            "<h3>🔍 Present Levels</h3><p>{}</p><hr>\
             <h3>⚠️ Areas of Concern</h3><p>{}</p><hr>\
             <h3>🧰 Accommodations</h3><p>{}</p>",
            body, body, body
        );
        let result = IepValidator::new().validate(&intake(String::new()), &document);

        prop_assert_eq!(result.compliant, result.violations.is_empty());
        prop_assert_eq!(result.summary.total, result.violations.len());
    }
}

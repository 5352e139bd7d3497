pub mod types;

pub use types::{
    DraftDocument, EvidenceKind, IepInput, Occurrence, Rule, Severity, ValidationResult,
    ValidationSummary, Violation,
};

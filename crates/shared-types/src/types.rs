use serde::{Deserialize, Serialize};

/// Structured intake facts about a student. The source of truth for what is
/// authorized to appear in a generated draft; the validator never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IepInput {
    /// Free-text description of current academic and functional performance.
    /// Ground truth for invented-data detection.
    pub performance_narrative: String,
    pub grade_level: String,
    /// Literal short string, e.g. "Academic (reading)". Must be reproduced
    /// verbatim in the draft.
    pub areas_of_concern: String,
    pub priority_goal_areas: Vec<String>,
    pub accommodations: Vec<String>,
}

/// A generated IEP draft as received from the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDocument {
    pub id: String,
    /// Section-delimited HTML: `<h3>` headings with emoji labels, sections
    /// separated by `<hr>`.
    pub html: String,
    pub created_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        };
        f.write_str(name)
    }
}

/// The closed set of content-policy rules the validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    DataInvention,
    UnauthorizedNarrative,
    LiteralFieldExpansion,
    UnauthorizedCategory,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::DataInvention => "DATA_INVENTION",
            Rule::UnauthorizedNarrative => "UNAUTHORIZED_NARRATIVE",
            Rule::LiteralFieldExpansion => "LITERAL_FIELD_EXPANSION",
            Rule::UnauthorizedCategory => "UNAUTHORIZED_CATEGORY",
        };
        f.write_str(name)
    }
}

/// Sub-type classification attached to each piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    ComprehensionPercentage,
    TimeOnTask,
    IndependencePercentage,
    PromptsFrequency,
    OpportunitiesMetric,
    FunctionalIndicator,
    ParentheticalExpansion,
    UnauthorizedCategory,
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EvidenceKind::ComprehensionPercentage => "comprehension_percentage",
            EvidenceKind::TimeOnTask => "time_on_task",
            EvidenceKind::IndependencePercentage => "independence_percentage",
            EvidenceKind::PromptsFrequency => "prompts_frequency",
            EvidenceKind::OpportunitiesMetric => "opportunities_metric",
            EvidenceKind::FunctionalIndicator => "functional_indicator",
            EvidenceKind::ParentheticalExpansion => "parenthetical_expansion",
            EvidenceKind::UnauthorizedCategory => "unauthorized_category",
        };
        f.write_str(name)
    }
}

/// One piece of evidence for a violation: the exact matched text, its
/// sub-type, and (when available) a bounded window of surrounding text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub text: String,
    pub kind: EvidenceKind,
    pub context: Option<String>,
    pub reason: Option<String>,
}

/// One detected rule breach. Created by exactly one checker; immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
    pub occurrences: Vec<Occurrence>,
}

/// Violation counts by severity for quick display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
}

impl ValidationSummary {
    pub fn tally(violations: &[Violation]) -> Self {
        Self {
            total: violations.len(),
            critical: violations
                .iter()
                .filter(|v| v.severity == Severity::Critical)
                .count(),
            high: violations
                .iter()
                .filter(|v| v.severity == Severity::High)
                .count(),
        }
    }
}

/// Aggregate output of one validation call.
///
/// Invariants: `compliant == violations.is_empty()`,
/// `summary.total == violations.len()`, and the per-severity counts in
/// `summary` match `violations`. `checked_at` is metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub document_id: Option<String>,
    pub compliant: bool,
    pub violations: Vec<Violation>,
    pub summary: ValidationSummary,
    pub checked_at: u64,
}

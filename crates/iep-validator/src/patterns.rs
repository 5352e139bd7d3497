//! Static rule tables for the content-policy checkers.
//!
//! The tables are data, not control flow: tuning a phrase list or adding an
//! accommodation category does not touch the checkers themselves.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::EvidenceKind;

/// Narrative phrases that authorize attention-related content.
pub const ATTENTION_TRIGGERS: &[&str] = &["attention", "focus", "concentrat", "distract"];

/// Narrative phrases that authorize task-completion content.
pub const TASK_COMPLETION_TRIGGERS: &[&str] = &[
    "task completion",
    "finishing",
    "completes",
    "complete assignments",
];

/// Narrative phrases that authorize organization content.
pub const ORGANIZATION_TRIGGERS: &[&str] = &["organiz", "materials", "supplies"];

/// Narrative phrases that authorize behavior and self-regulation content.
pub const BEHAVIOR_TRIGGERS: &[&str] = &["behavior", "self-regulation", "impulse"];

/// Narrative phrases that authorize prompting and reminder content.
pub const PROMPTING_TRIGGERS: &[&str] = &["requires reminders", "needs prompts", "stays on task"];

/// All trigger categories. A phrase from any category authorizes
/// functional-performance narrative in the draft.
pub const TRIGGER_CATEGORIES: &[(&str, &[&str])] = &[
    ("attention", ATTENTION_TRIGGERS),
    ("task_completion", TASK_COMPLETION_TRIGGERS),
    ("organization", ORGANIZATION_TRIGGERS),
    ("behavior", BEHAVIOR_TRIGGERS),
    ("prompting", PROMPTING_TRIGGERS),
];

/// Literal phrases that mark functional-performance narrative in a draft.
pub const FUNCTIONAL_INDICATORS: &[&str] = &[
    "Functional Performance:",
    "maintaining focus",
    "maintaining attention",
    "task completion",
    "organizing materials",
    "completes assignments",
    "independently about",
    "independently approximately",
    "prompts approximately",
    "prompts every",
    "on task for",
];

/// An accommodations-table category and the Present Levels keywords that
/// authorize it.
pub struct CategoryRule {
    pub label: &'static str,
    pub marker: Regex,
    pub subject_keywords: &'static [&'static str],
}

lazy_static! {
    /// Metric shapes that count as quantified claims when they appear in
    /// Present Levels without verbatim support in the intake narrative.
    pub static ref INVENTED_METRIC_PATTERNS: Vec<(Regex, EvidenceKind)> = vec![
        (
            Regex::new(r"(?i)(\d+)%\s+(accuracy|comprehension|correct|on\s+comprehension)")
                .unwrap(),
            EvidenceKind::ComprehensionPercentage,
        ),
        (
            Regex::new(r"(?i)(\d+-\d+|\d+)\s+minutes?\s+(on[-\s]task|focus|attention|before|engaged)")
                .unwrap(),
            EvidenceKind::TimeOnTask,
        ),
        (
            Regex::new(r"(?i)(\d+)%\s+of the time").unwrap(),
            EvidenceKind::IndependencePercentage,
        ),
        (
            Regex::new(r"(?i)independently\s+(about\s+)?(\d+)%").unwrap(),
            EvidenceKind::IndependencePercentage,
        ),
        (
            Regex::new(r"(?i)(\d+)\s+prompts?\s+(per|every|approximately)").unwrap(),
            EvidenceKind::PromptsFrequency,
        ),
        (
            Regex::new(r"(?i)(\d+)\s+out of\s+(\d+)\s+(opportunities|trials)").unwrap(),
            EvidenceKind::OpportunitiesMetric,
        ),
    ];

    /// Case-insensitive matchers for the functional indicator phrases.
    pub static ref FUNCTIONAL_INDICATOR_PATTERNS: Vec<Regex> = FUNCTIONAL_INDICATORS
        .iter()
        .map(|phrase| Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap())
        .collect();

    /// Parenthetical example expansion of a literal field,
    /// e.g. "(e.g., reading, writing, math)".
    pub static ref EXPANSION_PATTERN: Regex = Regex::new(r"(?i)\(e\.g\.,\s*[^)]+\)").unwrap();

    /// Accommodation categories recognized in the services table. Each is
    /// authorized only when one of its subject keywords appears in Present
    /// Levels.
    pub static ref CATEGORY_RULES: Vec<CategoryRule> = vec![
        CategoryRule {
            label: "Writing",
            marker: Regex::new(r"(?i)📘\s*Writing|✍️\s*Writing").unwrap(),
            subject_keywords: &["writing", "written"],
        },
        CategoryRule {
            label: "Math",
            marker: Regex::new(r"(?i)🔢\s*Math|➗\s*Math").unwrap(),
            subject_keywords: &["math"],
        },
    ];
}

/// A bounded window of text around a match, for violation evidence.
///
/// Offsets are clamped to char boundaries; draft text carries multi-byte
/// emoji glyphs.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut lo = start.saturating_sub(radius);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    format!("...{}...", text[lo..hi].trim())
}

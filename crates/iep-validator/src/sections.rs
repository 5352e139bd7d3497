//! Section extraction from generated draft HTML.
//!
//! Drafts arrive as `<h3>`-delimited HTML with an emoji glyph before each
//! heading label and an `<hr>` between sections. The glyph is not stable
//! across generation runs, so lookup matches on the textual label only.

use lazy_static::lazy_static;
use regex::Regex;

/// Heading labels of the sections the rule checkers inspect.
pub const PRESENT_LEVELS_LABEL: &str = "Present Levels";
pub const AREAS_OF_CONCERN_LABEL: &str = "Areas of Concern";
pub const ACCOMMODATIONS_LABEL: &str = "Accommodations";

lazy_static! {
    /// A section ends at the next heading or at the horizontal rule the
    /// generator emits between sections.
    static ref SECTION_BOUNDARY: Regex = Regex::new(r"(?i)<h3>|<hr\s*/?>").unwrap();

    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    static ref LEADING_HEADING: Regex = Regex::new(r"(?is)^<h3>.*?</h3>").unwrap();
}

/// Extract the section introduced by `label` from draft HTML.
///
/// Returns the slice from (and including) the first `<h3>` heading whose
/// text starts with `label` (case-insensitive, optional glyph prefix) up to
/// but excluding the next section boundary, or the end of the document.
/// A missing heading yields an empty string; absence of a section is a
/// valid state meaning there is nothing to check.
pub fn extract_section<'a>(document: &'a str, label: &str) -> &'a str {
    let pattern = format!(r"(?i)<h3>[^<]*{}", regex::escape(label));
    let heading = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return "",
    };

    let start = match heading.find(document) {
        Some(m) => m,
        None => return "",
    };

    let end = SECTION_BOUNDARY
        .find_at(document, start.end())
        .map(|b| b.start())
        .unwrap_or(document.len());

    &document[start.start()..end]
}

/// Section text without its leading heading element.
pub fn section_body(section: &str) -> &str {
    match LEADING_HEADING.find(section) {
        Some(m) => &section[m.end()..],
        None => section,
    }
}

/// Remove markup tags and trim, for human-readable comparison values.
pub fn strip_markup(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

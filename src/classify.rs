//! Keyword-based section type classification.

use crate::model::TypeHint;

/// Keyword rules in precedence order. The first rule with a matching
/// keyword wins.
const RULES: &[(&[&str], TypeHint)] = &[
    (&["intro"], TypeHint::Background),
    (&["method", "approach"], TypeHint::Methodology),
    (&["result"], TypeHint::Findings),
    (&["discussion"], TypeHint::Interpretation),
    (&["conclusion"], TypeHint::Summary),
];

/// Classify a section from its heading text.
///
/// Matching is case-insensitive substring containment, so `"Approaches"`
/// and `"3.1 Methodological Notes"` both land in
/// [`TypeHint::Methodology`]. Headings matching no rule are
/// [`TypeHint::General`].
pub fn classify(heading: &str) -> TypeHint {
    let lower = heading.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, hint)| *hint)
        .unwrap_or(TypeHint::General)
}

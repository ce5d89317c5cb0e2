//! Plain text rendering.

use crate::model::Section;

/// Render sections as plain text: the heading on its own line, then the
/// body, then a blank line.
pub fn to_text(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("{}\n{}", s.heading, s.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

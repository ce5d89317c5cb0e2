//! Section splitting.
//!
//! The splitter walks normalized text line by line. A stripped line that
//! is exactly a member of the heading set closes the current section and
//! opens a new one; every other line is appended to the current section's
//! body followed by a single space.
//!
//! A heading that recurs as a line (for instance a running header on every
//! page) opens a fresh section on each occurrence, with its own position.
//! Those sections are not merged.

use crate::heading::HeadingSet;
use crate::model::Section;

/// Output of a split, including what the empty-body filter removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Sections with non-empty bodies, in scan order
    pub sections: Vec<Section>,

    /// Sections dropped because their body was empty
    pub dropped: usize,
}

/// Split `text` at the lines found in `headings`.
pub fn split_sections(text: &str, headings: &HeadingSet) -> Vec<Section> {
    split_detailed(text, headings).sections
}

/// Split `text`, reporting how many empty sections were dropped.
pub fn split_detailed(text: &str, headings: &HeadingSet) -> SplitOutcome {
    let mut scanned = Vec::new();
    let mut current = Section::preamble();
    let mut next_position = 1u32;

    for line in text.split('\n') {
        let line = line.trim();
        if headings.contains(line) {
            scanned.push(std::mem::replace(
                &mut current,
                Section::new(line, next_position),
            ));
            next_position += 1;
        } else {
            current.push_line(line);
        }
    }
    scanned.push(current);

    let total = scanned.len();
    let sections: Vec<Section> = scanned
        .into_iter()
        .filter(|section| !section.is_blank())
        .map(Section::finish)
        .collect();

    SplitOutcome {
        dropped: total - sections.len(),
        sections,
    }
}
